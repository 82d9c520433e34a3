#![no_main]

use buffer::InBuffer;
use codec::{
    decode_blob_ref, decode_int, decode_str, decode_uint, decode_variable_array_with_limits,
    CodecLimits,
};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Some((&ops, rest)) = data.split_first() else {
        return;
    };
    let limits = CodecLimits::for_testing();
    let mut inp = InBuffer::new(rest);
    let mut selector = ops;

    // Use the first byte, rotated, to pick a bounded sequence of decoders.
    for _ in 0..256 {
        if inp.is_empty() {
            break;
        }
        let before = inp.position();
        let ok = match selector % 8 {
            0 => decode_uint::<u8>(&mut inp).is_ok(),
            1 => decode_uint::<u16>(&mut inp).is_ok(),
            2 => decode_uint::<u32>(&mut inp).is_ok(),
            3 => decode_uint::<u64>(&mut inp).is_ok(),
            4 => decode_int::<i64>(&mut inp).is_ok(),
            5 => decode_str(&mut inp).is_ok(),
            6 => decode_blob_ref(&mut inp).is_ok(),
            _ => decode_variable_array_with_limits::<i32>(&mut inp, &limits).is_ok(),
        };
        assert!(inp.position() <= rest.len());
        if !ok {
            // Scalar and byte-string decoders never move on failure.
            if selector % 8 < 7 {
                assert_eq!(inp.position(), before);
            }
            break;
        }
        selector = selector.rotate_left(3) ^ rest[before];
    }
});
