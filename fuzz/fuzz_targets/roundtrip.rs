#![no_main]
use amc::Codec;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: (Vec<u8>, Vec<u8>)| {
    // Property: decode(encode(x)) == x under any key, and the output grows by at most one byte.
    let (key, data) = input;
    let codec = Codec::from_key_bytes(&key);
    let packed = codec.encode(&data).expect("routing failed on a built table");
    assert!(packed.len() <= data.len() + 1);
    match codec.decode(&packed) {
        Ok(d) => assert_eq!(d, data),
        Err(e) => panic!("decode failed on encoder output: {:?}", e),
    }
});
