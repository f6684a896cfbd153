#![no_main]
use libfuzzer_sys::fuzz_target;
use zenpnm_stream::{PnmDecoder, from_fn};

fuzz_target!(|data: &[u8]| {
    // No limits: the sample buffer only grows with the input, so absurd
    // headers must end in an error, never a panic or a huge allocation.
    let mut rest = data;
    let mut decoder = PnmDecoder::new(from_fn(move |_| {
        let (head, tail) = rest.split_at(rest.len().min(7));
        rest = tail;
        head.to_vec()
    }));
    let streamed = decoder.decode().ok().map(|_| decoder.data().clone());
    let whole = zenpnm_stream::decode(data, enough::Unstoppable)
        .ok()
        .map(|image| image.data);
    assert_eq!(streamed, whole, "block size changed the decoded samples");
});
