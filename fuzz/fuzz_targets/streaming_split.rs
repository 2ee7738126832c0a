#![no_main]
use libfuzzer_sys::fuzz_target;
use sha2_engine::digest;

// The first byte picks the piece length; the rest is the message. Feeding the
// message in pieces must give the same digest as hashing it in one call.
fuzz_target!(|data: &[u8]| {
    let Some((&piece_len, msg)) = data.split_first() else {
        return;
    };
    let piece_len = usize::from(piece_len).max(1);

    for algorithm in [&digest::SHA224, &digest::SHA256] {
        let expected = digest::digest(algorithm, msg);

        let mut ctx = digest::Context::new(algorithm);
        for piece in msg.chunks(piece_len) {
            ctx.update(piece).unwrap();
        }
        assert_eq!(ctx.finish().as_ref(), expected.as_ref());
    }
});
