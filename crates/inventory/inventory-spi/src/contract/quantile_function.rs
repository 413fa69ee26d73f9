//! Quantile function trait.

/// Inverse cumulative distribution function.
pub trait QuantileFunction: Send + Sync {
    /// Value below which a fraction `p` of the distribution lies.
    fn inverse_cdf(&self, p: f64) -> f64;
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Uniform distribution on [0, 1]; its quantile is the identity.
    struct StandardUniform;

    impl QuantileFunction for StandardUniform {
        fn inverse_cdf(&self, p: f64) -> f64 {
            p.clamp(0.0, 1.0)
        }
    }

    #[test]
    fn test_quantile_trait_object() {
        let q: Box<dyn QuantileFunction> = Box::new(StandardUniform);
        assert_eq!(q.inverse_cdf(0.25), 0.25);
        assert_eq!(q.inverse_cdf(2.0), 1.0);
    }
}
