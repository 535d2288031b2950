use std::sync::{Arc, Mutex};

use jplaunch::errors::{LaunchError, Result};
use jplaunch::launch::ClasspathProvider;

/// A fake provider that:
/// - returns a fixed element list
/// - records how many times it was asked.
pub struct StaticClasspath {
    elements: Vec<String>,
    calls: Arc<Mutex<usize>>,
}

impl StaticClasspath {
    pub fn new(elements: Vec<String>) -> Self {
        Self {
            elements,
            calls: Arc::new(Mutex::new(0)),
        }
    }

    pub fn calls(&self) -> usize {
        *self.calls.lock().unwrap()
    }
}

impl ClasspathProvider for StaticClasspath {
    fn elements(&self) -> Result<Vec<String>> {
        let mut guard = self.calls.lock().unwrap();
        *guard += 1;
        Ok(self.elements.clone())
    }
}

/// A provider that always fails, modelling "dependency resolution has not
/// been performed yet".
pub struct FailingClasspath;

impl ClasspathProvider for FailingClasspath {
    fn elements(&self) -> Result<Vec<String>> {
        Err(LaunchError::ClasspathResolution(
            "dependency resolution not performed".to_string(),
        ))
    }
}
