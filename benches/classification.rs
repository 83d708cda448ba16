//! Classification throughput benchmarks

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use sematree::{classify, registry, Lang};

const RUST_SOURCE: &str = r#"
use std::collections::HashMap;

pub struct Index {
    entries: HashMap<String, Vec<usize>>,
}

impl Index {
    pub fn new() -> Self {
        Self { entries: HashMap::new() }
    }

    pub fn insert(&mut self, key: &str, position: usize) {
        self.entries.entry(key.to_string()).or_default().push(position);
    }

    pub fn lookup(&self, key: &str) -> Option<&[usize]> {
        self.entries.get(key).map(|positions| positions.as_slice())
    }
}

fn main() {
    let mut index = Index::new();
    for (i, word) in ["alpha", "beta", "gamma"].iter().enumerate() {
        index.insert(word, i);
    }
    if let Some(positions) = index.lookup("beta") {
        println!("{:?}", positions);
    }
}
"#;

const PYTHON_SOURCE: &str = r#"
class Router:
    def __init__(self):
        self.routes = {}

    def add(self, path, handler):
        self.routes[path] = handler

    def dispatch(self, path):
        handler = self.routes.get(path)
        if handler is None:
            raise KeyError(path)
        return handler()


def health():
    return "ok"


router = Router()
router.add("/health", health)
"#;

fn bench_classification(c: &mut Criterion) {
    let mut group = c.benchmark_group("classify");

    for (name, lang, source) in [
        ("rust", Lang::Rust, RUST_SOURCE),
        ("python", Lang::Python, PYTHON_SOURCE),
    ] {
        let mut parser = tree_sitter::Parser::new();
        parser.set_language(&lang.tree_sitter_language()).unwrap();
        let tree = parser.parse(source, None).unwrap();

        group.bench_function(name, |b| {
            b.iter(|| {
                black_box(classify(
                    tree.root_node(),
                    black_box(source),
                    lang.registry_id(),
                    registry(),
                ))
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_classification);
criterion_main!(benches);
