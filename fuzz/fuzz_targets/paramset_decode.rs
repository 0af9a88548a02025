#![no_main]

use libfuzzer_sys::fuzz_target;
use wire::{decode_component, decode_param_set, encode_param_set};

fuzz_target!(|data: &[u8]| {
    let Ok(query) = std::str::from_utf8(data) else {
        return;
    };
    let _ = decode_component(query);

    let params = decode_param_set(query);
    // Decoded keys and values re-encode without loss.
    let encoded = encode_param_set(Some(&params));
    assert_eq!(decode_param_set(&encoded), params);
});
