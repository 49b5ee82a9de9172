#![no_main]

use asciicast_policy::policy::PolicyEngine;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    // Arbitrary strings as policy YAML: errors only, never a panic
    let _ = PolicyEngine::from_yaml(data);
});
