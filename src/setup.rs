//! Parse series configuration files

use std::fmt;
use std::error::Error;
use std::path::Path;
use yaml_rust::{YamlLoader, yaml::Yaml};
use meval::Context;
use rand::prelude::*;
use rand_xoshiro::Xoshiro256StarStar;

use crate::constants::*;
use crate::{SeriesError, SeriesOptions, Point};

pub enum InputError {
    InvalidInputFile(&'static str),
    CouldNotParse(String, String),
    MissingField(String, String),
    Series(SeriesError),
}

impl fmt::Debug for InputError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use InputError::*;
        match self {
            InvalidInputFile(s) => write!(f, "invalid input file: {}", s),
            CouldNotParse(token,field) => write!(f, "unable to parse '{}' = '{}' in configuration file", token, field),
            MissingField(section,field) => write!(f, "unable to find '{}' in section '{}' with correct type in configuration file", field, section),
            Series(e) => write!(f, "invalid series in configuration file: {}", e),
        }
    }
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl Error for InputError {}

impl From<SeriesError> for InputError {
    fn from(e: SeriesError) -> InputError {
        InputError::Series(e)
    }
}

/// Represents the input configuration, can be queried
/// for desired parameters
pub struct Configuration<'a> {
    input: Yaml,
    ctx: Context<'a>,
}

impl<'a> Configuration<'a> {
    pub fn from_file(path: &Path) -> Result<Configuration<'a>,InputError> {
        let contents = std::fs::read_to_string(path).map_err(|_e| InputError::InvalidInputFile("unable to read file"))?;
        Configuration::from_str(&contents)
    }

    pub fn from_str(contents: &str) -> Result<Configuration<'a>,InputError> {
        let input = YamlLoader::load_from_str(contents).map_err(|_e| InputError::InvalidInputFile("yaml trouble"))?;
        let input = input.first().ok_or(InputError::InvalidInputFile("yaml trouble"))?;
        Ok(Configuration {
            input: input.clone(),
            ctx: Context::new(),
        })
    }

    /// Loads the default constants, then everything defined
    /// in `section`, into the context used to evaluate
    /// mathematical expressions.
    pub fn with_context(&mut self, section: &str) -> &mut Self {
        self.ctx
            .var("half_pi", HALF_PI)
            .var("default_n", DEFAULT_TERM_COUNT as f64);

        // a constant cannot depend on other constants yet...
        let tmp = self.ctx.clone();

        if let Some(hash) = self.input[section].as_hash() {
            for (a, b) in hash {
                match (a, b) {
                    (Yaml::String(s), Yaml::Real(v)) => {
                        if let Ok(num) = v.parse::<f64>() {self.ctx.var(s, num);}
                    },
                    (Yaml::String(s), Yaml::Integer(i)) => {
                        self.ctx.var(s, *i as f64);
                    },
                    (Yaml::String(s), Yaml::String(v)) => {
                        if let Ok(expr) = v.parse::<meval::Expr>() {
                            if let Ok(num) = expr.eval_with_context(&tmp) {self.ctx.var(s, num);}
                        }
                    },
                    _ => ()
                }
            }
        }

        self
    }

    pub fn real(&self, section: &str, field: &str) -> Result<f64, InputError> {
        let name = field.to_owned();
        match &self.input[section][field] {
            Yaml::Real(s) => s.parse::<f64>().map_err(|_| InputError::CouldNotParse(name.clone(), s.clone())),
            Yaml::Integer(i) => Ok(*i as f64),
            Yaml::String(s) => {
                let expr = s.parse::<meval::Expr>().map_err(|_| InputError::CouldNotParse(name.clone(), s.clone()))?;
                expr.eval_with_context(&self.ctx).map_err(|_| InputError::CouldNotParse(name.clone(), s.clone()))
            },
            _ => Err(InputError::MissingField(section.to_owned(), name)),
        }
    }

    pub fn integer(&self, section: &str, field: &str) -> Result<i64, InputError> {
        match &self.input[section][field] {
            Yaml::Integer(i) => Ok(*i),
            _ => Err(InputError::MissingField(section.to_owned(), field.to_owned())),
        }
    }

    pub fn string(&self, section: &str, field: &str) -> Result<String, InputError> {
        match &self.input[section][field] {
            Yaml::String(s) => Ok(s.clone()),
            _ => Err(InputError::MissingField(section.to_owned(), field.to_owned())),
        }
    }

    /// Reads the series to be evaluated from `section`:
    ///   variant: coefficients | fixed | random (default fixed)
    ///   x: evaluation point, required if fixed
    ///   n: number of terms (default 3)
    pub fn series_options(&self, section: &str) -> Result<SeriesOptions, InputError> {
        let variant = match &self.input[section]["variant"] {
            Yaml::BadValue => "fixed".to_owned(),
            _ => self.string(section, "variant")?,
        };

        let n = match &self.input[section]["n"] {
            Yaml::BadValue => DEFAULT_TERM_COUNT,
            _ => {
                let n = self.integer(section, "n")?;
                if n > i32::MAX as i64 {
                    return Err(InputError::CouldNotParse("n".to_owned(), n.to_string()));
                } else if n < 0 {
                    return Err(SeriesError::NegativeTermCount(n.max(i32::MIN as i64) as i32).into());
                }
                n as i32
            },
        };

        let point = match variant.as_str() {
            "coefficients" => Point::Unevaluated,
            "fixed" => Point::Fixed(self.real(section, "x")?),
            "random" => Point::Random,
            _ => return Err(InputError::CouldNotParse("variant".to_owned(), variant)),
        };

        Ok(SeriesOptions {point, n})
    }

    /// Returns a generator seeded by the optional `seed` field
    /// of `section`, or from system entropy if there is none.
    pub fn rng(&self, section: &str) -> Result<Xoshiro256StarStar, InputError> {
        match &self.input[section]["seed"] {
            Yaml::BadValue => Ok(Xoshiro256StarStar::from_entropy()),
            _ => {
                let seed = self.integer(section, "seed")?;
                Ok(Xoshiro256StarStar::seed_from_u64(seed as u64))
            },
        }
    }
}
