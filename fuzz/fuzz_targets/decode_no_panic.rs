#![no_main]
use amc::Codec;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: (Vec<u8>, Vec<u8>)| {
    // Property: the decoder never panics on arbitrary input.
    // It may return Ok(_) or a defined AmcError.
    let (key, data) = input;
    let _ = Codec::from_key_bytes(&key).decode(&data);
});
