use buffer::{InBuffer, OutBuffer};
use proptest::prelude::*;

#[derive(Clone, Debug)]
enum Op {
    Byte(u8),
    Slice(Vec<u8>),
}

impl Op {
    fn len(&self) -> usize {
        match self {
            Self::Byte(_) => 1,
            Self::Slice(bytes) => bytes.len(),
        }
    }
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        any::<u8>().prop_map(Op::Byte),
        prop::collection::vec(any::<u8>(), 0..32).prop_map(Op::Slice),
    ]
}

proptest! {
    #[test]
    fn prop_roundtrip_ops(ops in prop::collection::vec(op_strategy(), 1..64)) {
        let total: usize = ops.iter().map(Op::len).sum();
        let mut storage = vec![0u8; total];
        let mut writer = OutBuffer::new(&mut storage);

        for op in &ops {
            match op {
                Op::Byte(b) => writer.put(*b).unwrap(),
                Op::Slice(bytes) => writer.put_slice(bytes).unwrap(),
            }
        }
        prop_assert!(writer.is_full());
        let used = writer.finish();
        prop_assert_eq!(used, total);

        let mut reader = InBuffer::new(&storage);
        for op in &ops {
            match op {
                Op::Byte(b) => {
                    prop_assert_eq!(reader.get().unwrap(), *b);
                }
                Op::Slice(bytes) => {
                    prop_assert_eq!(reader.get_slice(bytes.len()).unwrap(), &bytes[..]);
                }
            }
        }
        prop_assert!(reader.is_empty());
    }

    #[test]
    fn prop_overrun_never_moves_cursor(
        data in prop::collection::vec(any::<u8>(), 0..16),
        skip in 0usize..16,
        extra in 1usize..8,
    ) {
        let skip = skip.min(data.len());
        let mut reader = InBuffer::new(&data);
        reader.advance(skip).unwrap();
        let ask = reader.remaining() + extra;
        prop_assert!(reader.get_slice(ask).is_err());
        prop_assert_eq!(reader.position(), skip);

        let mut storage = vec![0u8; data.len()];
        let mut writer = OutBuffer::new(&mut storage);
        writer.put_slice(&data[..skip]).unwrap();
        let too_big = vec![0xFFu8; writer.remaining() + extra];
        prop_assert!(writer.put_slice(&too_big).is_err());
        prop_assert_eq!(writer.position(), skip);
    }
}
