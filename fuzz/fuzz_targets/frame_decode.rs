#![no_main]

use buffer::{InBuffer, OutBuffer};
use codec::CodecLimits;
use libfuzzer_sys::fuzz_target;
use wire::{decode_message_with_limits, encode_frame, max_frame_len, FrameLimits, Frames};

fuzz_target!(|data: &[u8]| {
    let limits = FrameLimits::for_testing();

    // Arbitrary streams must never panic, and every payload that decodes must
    // survive another frame roundtrip.
    let mut frames = Frames::with_limits(data, limits.clone());
    loop {
        let start = frames.position();
        let Some(Ok(payload)) = frames.next() else {
            break;
        };
        let end = frames.position();

        let mut storage = vec![0u8; max_frame_len(payload.len())];
        let mut out = OutBuffer::new(&mut storage);
        encode_frame(&mut out, &payload).expect("reframe");
        let used = out.finish();
        let mut inp = InBuffer::new(&storage[..used]);
        assert_eq!(wire::decode_frame(&mut inp).expect("unframe"), payload);
        assert!(end > start);
    }

    let mut inp = InBuffer::new(data);
    let codec_limits = CodecLimits::for_testing();
    let _ = decode_message_with_limits::<Vec<String>>(&mut inp, &limits, &codec_limits);
});
