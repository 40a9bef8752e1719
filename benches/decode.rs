use divan::{Bencher, black_box};
use serde_json::json;
use vinefilter::{Dependency, Role, Vine};

fn main() {
    divan::main();
}

const EDGES: &[&str] = &[
    "root(ROOT-0,chopped-2)",
    "nsubj(chopped-2,I-1)",
    "det(pepper-6,a-3)",
    "amod(pepper-6,green-4)",
    "nn(pepper-6,bell-5)",
    "dobj(chopped-2,pepper-6)",
    "conj_and(chopped-2',diced-8'')",
    "amod(bell-pepper-2,well-known-1)",
];

#[divan::bench]
fn parse_dependencies(bencher: Bencher) {
    bencher.bench_local(|| {
        for edge in EDGES {
            black_box(Dependency::parse(black_box(edge)).unwrap());
        }
    });
}

#[divan::bench]
fn build_vine(bencher: Bencher) {
    let document = json!({
        "id": "1",
        "url": "https://vine.co/v/1",
        "text": "I chopped a green bell pepper",
        "scrubbed_text": "i chopped a green bell pepper",
        "pos_tags": ["ROOT-ROOT", "PRP-I", "VBD-chopped", "DT-a", "JJ-green", "NN-bell", "NN-pepper"],
        "grammar_dependencies": EDGES,
    });
    bencher.bench_local(|| black_box(Vine::from_json(black_box(&document)).unwrap()));
}

#[divan::bench]
fn match_phrase(bencher: Bencher) {
    let document = json!({
        "id": "1",
        "url": "https://vine.co/v/1",
        "text": "I chopped a green bell pepper",
        "scrubbed_text": "i chopped a green bell pepper",
        "pos_tags": [],
        "grammar_dependencies": EDGES,
    });
    let vine = Vine::from_json(&document).unwrap();
    bencher.bench_local(|| {
        black_box(vine.matches_phrase(black_box("green bell pepper"), &["dobj"], Role::Dependent))
    });
}
