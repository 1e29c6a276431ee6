//! Performance counters for request handlers.

use std::sync::atomic::{AtomicU32, Ordering};

#[derive(Debug)]
pub struct PerfCounter {
    name: &'static str,
    value: AtomicU32,
}

impl PerfCounter {
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            value: AtomicU32::new(0),
        }
    }

    /// Increment counter
    pub fn incr(&self) {
        self.value.fetch_add(1, Ordering::Relaxed);
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn value(&self) -> u32 {
        self.value.load(Ordering::Relaxed)
    }
}

/// Create a counter struct and a static instance of it for a request
/// handler module. One counter per handler.
#[macro_export]
macro_rules! create_counters {
    (
        $counters_struct_type_name:ident,
        $counters_static_name:ident,
        $( $name:ident , )*
    ) => {
        pub struct $counters_struct_type_name {
            $(
                pub $name: $crate::perf::PerfCounter,
            )*
        }

        pub static $counters_static_name: $counters_struct_type_name =
            $counters_struct_type_name {
                $(
                    $name: $crate::perf::PerfCounter::new(stringify!($name)),
                )*
            };
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counter_increments() {
        let counter = PerfCounter::new("test");
        assert_eq!(counter.value(), 0);
        counter.incr();
        counter.incr();
        assert_eq!(counter.value(), 2);
        assert_eq!(counter.name(), "test");
    }
}
