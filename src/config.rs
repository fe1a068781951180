use std::{fs, io};

use serde::Deserialize;

use crate::numbers::Rational;

pub type DemoInt = i32;

// operands of the built-in example, (numerator, denominator)
pub const DEFAULT_LHS: (DemoInt, DemoInt) = (1, 2);
pub const DEFAULT_RHS: (DemoInt, DemoInt) = (3, 4);

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct OperandPair {
    pub lhs: Rational<DemoInt>,
    pub rhs: Rational<DemoInt>,
}

impl Default for OperandPair {
    fn default() -> Self {
        Self {
            lhs: Rational::new(DEFAULT_LHS.0, DEFAULT_LHS.1)
                .expect("DEFAULT_LHS denominator must not be zero"),
            rhs: Rational::new(DEFAULT_RHS.0, DEFAULT_RHS.1)
                .expect("DEFAULT_RHS denominator must not be zero"),
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Config {
    #[serde(default = "default_pairs")]
    pub pairs: Vec<OperandPair>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            pairs: default_pairs(),
        }
    }
}

fn default_pairs() -> Vec<OperandPair> {
    vec![OperandPair::default()]
}

pub const CONFIG_PATH_ENV: &str = "DEMO_CONFIG";
pub const DEFAULT_CONFIG_PATH: &str = "demo.json";

pub fn load_config(path: &str) -> Result<Config, io::Error> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) => {
            log::warn!("Failed to read {path}: {}", err);
            return Ok(Config::default());
        }
    };
    let config: Config = serde_json::from_str(&content)?;
    Ok(config)
}
