use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex};
use atomic_immut::AtomicImmut;
use trackable::error::ErrorKindExt;

use {Error, ErrorKind, Result};
use function::{AggregateFunction, Percentile};

lazy_static! {
    static ref DEFAULT_REGISTRY: FunctionRegistry = FunctionRegistry::with_builtins();
}

/// Returns the default registry, in which the built-in functions are registered.
pub fn default_registry() -> FunctionRegistry {
    DEFAULT_REGISTRY.clone()
}

/// A registry of aggregate functions.
///
/// Function names are case insensitive.
/// Cloned registries share the same table.
///
/// Lookups read a snapshot of the table without locking.
/// Registrations are serialized with each other.
#[derive(Clone)]
pub struct FunctionRegistry(Arc<Inner>);
impl FunctionRegistry {
    /// Makes an empty registry.
    pub fn new() -> Self {
        let inner = Inner {
            functions: AtomicImmut::new(HashMap::new()),
            write_lock: Mutex::new(()),
        };
        FunctionRegistry(Arc::new(inner))
    }

    /// Makes a registry in which the built-in functions are registered.
    pub fn with_builtins() -> Self {
        let this = Self::new();
        this.register(Percentile).expect("Never fails");
        this
    }

    /// Registers `function`.
    ///
    /// # Errors
    ///
    /// If a function with the same name has already been registered,
    /// this method returns `ErrorKind::InvalidInput` error.
    pub fn register<F>(&self, function: F) -> Result<()>
    where
        F: AggregateFunction + 'static,
    {
        let key = function.name().to_lowercase();
        track_assert!(!key.is_empty(), ErrorKind::InvalidInput);

        let _guard = track!(
            self.0
                .write_lock
                .lock()
                .map_err(|e| Error::from(ErrorKind::Other.cause(e.to_string())))
        )?;
        track_assert!(
            !self.0.functions.load().contains_key(&key),
            ErrorKind::InvalidInput,
            "Already registered: {:?}",
            key
        );

        let function: Arc<AggregateFunction> = Arc::new(function);
        self.0.functions.update(move |functions| {
            let mut functions = functions.clone();
            functions.insert(key.clone(), function.clone());
            functions
        });
        Ok(())
    }

    /// Returns the function named `name`.
    pub fn get(&self, name: &str) -> Option<Arc<AggregateFunction>> {
        self.0.functions.load().get(&name.to_lowercase()).cloned()
    }

    /// Returns the names of the registered functions in ascending order.
    pub fn names(&self) -> Vec<String> {
        let mut names = self.0.functions.load().keys().cloned().collect::<Vec<_>>();
        names.sort();
        names
    }
}
impl Default for FunctionRegistry {
    fn default() -> Self {
        Self::new()
    }
}
impl fmt::Debug for FunctionRegistry {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "FunctionRegistry {{ functions: {:?} }}", self.names())
    }
}

struct Inner {
    functions: AtomicImmut<HashMap<String, Arc<AggregateFunction>>>,
    write_lock: Mutex<()>,
}
