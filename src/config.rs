//! Startup-parameter validation.
//!
//! Every knob the demo binaries accept passes through here before a grid or
//! rule table is built. Invalid input is an error with a message, never a
//! silent clamp.

use thiserror::Error;

/// Window size shared by all four demos.
pub const WINDOW_WIDTH: u32 = 800;
pub const WINDOW_HEIGHT: u32 = 600;

/// Grid dimensions derived from the window size and an integer scale factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridSize {
    pub width: usize,
    pub height: usize,
}

/// Rejected startup parameters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("scale factor must be positive")]
    ZeroScale,

    #[error("scale factor {scale} must evenly divide the {width}x{height} window")]
    ScaleMismatch { scale: u32, width: u32, height: u32 },

    #[error("rule number must be an integer in 0..=255, got {0:?}")]
    RuleNumber(String),

    #[error("turn rule needs at least 2 symbols, got {0}")]
    RuleTooShort(usize),

    #[error("turn rule may only contain 'L' and 'R', found {0:?}")]
    BadTurnSymbol(char),

    #[error("heading must be one of N, E, S, W, got {0:?}")]
    BadHeading(String),
}

/// Grid dimensions for a demo: the window divided by `scale`, which must
/// divide both window dimensions exactly so cells map to whole pixels.
pub fn grid_size(scale: u32) -> Result<GridSize, ConfigError> {
    if scale == 0 {
        return Err(ConfigError::ZeroScale);
    }
    if WINDOW_WIDTH % scale != 0 || WINDOW_HEIGHT % scale != 0 {
        return Err(ConfigError::ScaleMismatch {
            scale,
            width: WINDOW_WIDTH,
            height: WINDOW_HEIGHT,
        });
    }
    Ok(GridSize {
        width: (WINDOW_WIDTH / scale) as usize,
        height: (WINDOW_HEIGHT / scale) as usize,
    })
}

/// Parses a Wolfram rule number. The `u8` return type is the 0..=255 range
/// check; anything else is a config error.
pub fn parse_rule_number(arg: &str) -> Result<u8, ConfigError> {
    arg.trim()
        .parse::<u8>()
        .map_err(|_| ConfigError::RuleNumber(arg.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_size_divides_the_window() {
        let size = grid_size(4).unwrap();
        assert_eq!(size.width, 200);
        assert_eq!(size.height, 150);
    }

    #[test]
    fn grid_size_rejects_non_divisors() {
        assert!(matches!(
            grid_size(3),
            Err(ConfigError::ScaleMismatch { scale: 3, .. })
        ));
        assert_eq!(grid_size(0), Err(ConfigError::ZeroScale));
    }

    #[test]
    fn rule_number_range_is_enforced() {
        assert_eq!(parse_rule_number("150").unwrap(), 150);
        assert_eq!(parse_rule_number(" 0 ").unwrap(), 0);
        assert!(parse_rule_number("256").is_err());
        assert!(parse_rule_number("-1").is_err());
        assert!(parse_rule_number("ninety").is_err());
    }
}
