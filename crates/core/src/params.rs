//! Pure helper functions for extracting typed parameters from a
//! `serde_json::Value` object.
//!
//! Each helper takes a JSON value, a key name, and a default. If the key is
//! missing or the value is not the expected type, the default is returned.
//! These never fail.

use serde_json::Value;

/// Extracts an `f64` from `params[name]`, returning `default` if missing or
/// wrong type. Accepts JSON integers too.
pub fn param_f64(params: &Value, name: &str, default: f64) -> f64 {
    params.get(name).and_then(Value::as_f64).unwrap_or(default)
}

/// Extracts a `usize` from `params[name]`, returning `default` if missing
/// or not a non-negative integer.
pub fn param_usize(params: &Value, name: &str, default: usize) -> usize {
    params
        .get(name)
        .and_then(Value::as_u64)
        .map(|v| v as usize)
        .unwrap_or(default)
}

/// Extracts a `bool` from `params[name]`, returning `default` if missing or
/// wrong type.
pub fn param_bool(params: &Value, name: &str, default: bool) -> bool {
    params.get(name).and_then(Value::as_bool).unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    /// The overrides object a `--params` flag produces for the warp family:
    /// some keys present, some absent, one given as an integer literal.
    fn warp_overrides() -> Value {
        json!({
            "invert_contraction": true,
            "decay_rate": 0.25,
            "noise_sigma": 0,
        })
    }

    #[test]
    fn present_keys_override_the_caller_default() {
        let p = warp_overrides();
        assert!(param_bool(&p, "invert_contraction", false));
        assert_eq!(param_f64(&p, "decay_rate", 0.1), 0.25);
    }

    #[test]
    fn absent_keys_keep_the_preset_value() {
        // The caller passes its preset value as the default; wave_amp is
        // not overridden, so the realistic preset's 0.1 must survive.
        let p = warp_overrides();
        assert_eq!(param_f64(&p, "wave_amp", 0.1), 0.1);
        assert!(!param_bool(&p, "some_future_flag", false));
    }

    #[test]
    fn json_integer_literals_satisfy_float_params() {
        // `"noise_sigma": 0` must read as 0.0 (noise off), not fall back
        // to the preset's non-zero sigma.
        let p = warp_overrides();
        assert_eq!(param_f64(&p, "noise_sigma", 0.1), 0.0);
    }

    #[test]
    fn wrong_typed_overrides_fall_back_instead_of_failing() {
        let p = json!({"decay_rate": "slow", "levels": 2.5, "invert_contraction": 1});
        assert_eq!(param_f64(&p, "decay_rate", 0.0), 0.0);
        assert_eq!(param_usize(&p, "levels", 50), 50);
        assert!(!param_bool(&p, "invert_contraction", false));
    }

    #[test]
    fn usize_params_reject_negative_values() {
        assert_eq!(param_usize(&json!({"levels": -3}), "levels", 50), 50);
        assert_eq!(param_usize(&json!({"levels": 25}), "levels", 50), 25);
    }

    #[test]
    fn non_object_params_read_as_all_defaults() {
        // `--params '"fast"'` parses as a JSON string, not an object;
        // every lookup falls through to its default.
        for p in [json!("fast"), json!(null), json!([0.25])] {
            assert_eq!(param_f64(&p, "decay_rate", 0.1), 0.1);
            assert_eq!(param_usize(&p, "levels", 50), 50);
            assert!(param_bool(&p, "invert_contraction", true));
        }
    }
}
