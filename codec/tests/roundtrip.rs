use codec::{
    decode_int, decode_string, decode_uint, decode_variable_array, encode_int, encode_string,
    encode_uint, encode_variable_array, BufferError, InBuffer, OutBuffer, Varint, ZigZag,
};

fn roundtrip_unsigned<T: Varint + PartialEq + std::fmt::Debug>(values: impl Iterator<Item = T>) {
    for value in values {
        let mut storage = [0u8; 11];
        let mut out = OutBuffer::new(&mut storage);
        encode_uint(&mut out, value).unwrap();
        let used = out.finish();
        assert!(used <= T::MAX_ENCODED_SIZE);

        let mut inp = InBuffer::new(&storage[..used]);
        assert_eq!(decode_uint::<T>(&mut inp).unwrap(), value);
        assert!(inp.is_empty());
    }
}

fn roundtrip_signed<T: ZigZag + PartialEq + std::fmt::Debug>(values: impl Iterator<Item = T>) {
    for value in values {
        let mut storage = [0u8; 11];
        let mut out = OutBuffer::new(&mut storage);
        encode_int(&mut out, value).unwrap();
        let used = out.finish();
        assert!(used <= T::MAX_ENCODED_SIZE);

        let mut inp = InBuffer::new(&storage[..used]);
        assert_eq!(decode_int::<T>(&mut inp).unwrap(), value);
    }
}

#[test]
fn one_bit_set_every_width() {
    roundtrip_unsigned((0..8).map(|j| 1u8 << j));
    roundtrip_unsigned((0..16).map(|j| 1u16 << j));
    roundtrip_unsigned((0..32).map(|j| 1u32 << j));
    roundtrip_unsigned((0..64).map(|j| 1u64 << j));
    roundtrip_signed((0..8).map(|j| 1i8 << j));
    roundtrip_signed((0..16).map(|j| 1i16 << j));
    roundtrip_signed((0..32).map(|j| 1i32 << j));
    roundtrip_signed((0..64).map(|j| 1i64 << j));
}

#[test]
fn extremes_every_width() {
    roundtrip_unsigned([0u8, u8::MAX].into_iter());
    roundtrip_unsigned([0u64, u64::MAX].into_iter());
    roundtrip_signed([i8::MIN, -1, 0, i8::MAX].into_iter());
    roundtrip_signed([i16::MIN, -1, 0, i16::MAX].into_iter());
    roundtrip_signed([i32::MIN, -1, 0, i32::MAX].into_iter());
    roundtrip_signed([i64::MIN, -1, 0, i64::MAX].into_iter());
}

#[test]
fn hello_world_string() {
    let mut storage = [0u8; 64];
    let mut out = OutBuffer::new(&mut storage);
    encode_string(&mut out, "Hello World!").unwrap();
    let used = out.finish();
    assert_eq!(used, 13);
    assert_eq!(storage[0], 0x0C);

    let mut inp = InBuffer::new(&storage[..used]);
    assert_eq!(decode_string(&mut inp).unwrap(), "Hello World!");
}

#[test]
fn u16_variable_array_preserves_order() {
    let mut storage = [0u8; 32];
    let mut out = OutBuffer::new(&mut storage);
    encode_variable_array(&mut out, &[1u16, 300, 65535]).unwrap();
    let used = out.finish();

    let mut inp = InBuffer::new(&storage[..used]);
    let decoded: Vec<u16> = decode_variable_array(&mut inp).unwrap();
    assert_eq!(decoded, vec![1, 300, 65535]);
}

#[test]
fn too_small_buffer_overflows() {
    for (capacity, value) in [(0usize, 0u64), (1, 128), (2, 16_384), (9, u64::MAX)] {
        let mut storage = vec![0xA5u8; capacity];
        let mut out = OutBuffer::new(&mut storage);
        let err = encode_uint(&mut out, value).unwrap_err();
        assert!(matches!(err, BufferError::BufferOverflow { .. }));
        assert_eq!(out.position(), 0);
        assert!(storage.iter().all(|&b| b == 0xA5));
    }
}

#[test]
fn truncated_mid_varint_underflows() {
    let mut storage = [0u8; 10];
    let mut out = OutBuffer::new(&mut storage);
    encode_uint(&mut out, u64::MAX).unwrap();
    let used = out.finish();

    for cut in 0..used {
        let mut inp = InBuffer::new(&storage[..cut]);
        let err = decode_uint::<u64>(&mut inp).unwrap_err();
        assert!(err.is_underflow(), "cut at {cut}");
    }
}
