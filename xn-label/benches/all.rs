#[macro_use]
extern crate bencher;

use bencher::{black_box, Bencher};
use xn_label::{label_to_unicode, punycode};

fn decode_basic_heavy(bench: &mut Bencher) {
    let encoded = "Hello-Another-Way--fc4qua05auwb3674vfr0b";
    bench.iter(|| punycode::decode(black_box(encoded)));
}

fn decode_extended_only(bench: &mut Bencher) {
    let encoded = "n8jok5ay5dzabd5bym9f0cm5685rrjetr6pdxa";
    bench.iter(|| punycode::decode(black_box(encoded)));
}

fn decode_to_string(bench: &mut Bencher) {
    let encoded = "ihqwcrb4cv8a8dqg056pqjye";
    bench.iter(|| punycode::decode_to_string(black_box(encoded)));
}

fn ace_label(bench: &mut Bencher) {
    let label = "xn--b2sa7653c";
    bench.iter(|| label_to_unicode(black_box(label)).map(|s| s.len()));
}

benchmark_group!(
    benches,
    decode_basic_heavy,
    decode_extended_only,
    decode_to_string,
    ace_label
);
benchmark_main!(benches);
