//! Where configuration variables come from

use crate::error::{Error, Result};
use std::collections::HashMap;

/// A lookup of named configuration variables
///
/// The process environment is the usual source, but any map can stand in for
/// it so configuration can be built without touching global state.
pub trait VariableSource {
    /// Returns the raw value of `name`, or `None` when it is not set
    fn var(&self, name: &str) -> Result<Option<String>>;
}

/// The real process environment
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl VariableSource for ProcessEnv {
    fn var(&self, name: &str) -> Result<Option<String>> {
        match std::env::var(name) {
            Ok(value) => Ok(Some(value)),
            Err(std::env::VarError::NotPresent) => Ok(None),
            Err(std::env::VarError::NotUnicode(_)) => Err(Error::config(format!(
                "Environment variable {name} is not valid unicode"
            ))),
        }
    }
}

impl VariableSource for HashMap<String, String> {
    fn var(&self, name: &str) -> Result<Option<String>> {
        Ok(self.get(name).cloned())
    }
}

impl<S: VariableSource + ?Sized> VariableSource for &S {
    fn var(&self, name: &str) -> Result<Option<String>> {
        (**self).var(name)
    }
}

/// Two sources stacked on top of each other; `primary` wins key by key
#[derive(Debug, Clone)]
pub struct Layered<P, F> {
    primary: P,
    fallback: F,
}

impl<P, F> Layered<P, F> {
    pub fn new(primary: P, fallback: F) -> Self {
        Self { primary, fallback }
    }
}

impl<P: VariableSource, F: VariableSource> VariableSource for Layered<P, F> {
    fn var(&self, name: &str) -> Result<Option<String>> {
        match self.primary.var(name)? {
            Some(value) => Ok(Some(value)),
            None => self.fallback.var(name),
        }
    }
}
