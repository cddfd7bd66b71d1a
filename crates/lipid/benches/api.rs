use divan::{AllocProfiler, Bencher, black_box};
use lipid::{Convention, Lipid};

#[global_allocator]
static ALLOC: AllocProfiler = AllocProfiler::system();

const NAMES: [&str; 8] = [
    "PE (18:0/20:4)",
    "LPE d18:0/20:4",
    "TAG 50:5_FA14:2+H2O",
    "hcer d18:0/20:4",
    "TG(16:0/18:1/18:2) [M+NH4]+",
    "PC O-16:0/18:1",
    "Palmitic 16:0",
    "InvalidLipidName",
];

fn main() {
    divan::main();
}

#[divan::bench(args = NAMES)]
fn parse(name: &str) -> Lipid {
    Lipid::new(black_box(name))
}

#[divan::bench(args = Convention::ALL)]
fn render_all(bencher: Bencher, convention: Convention) {
    let lipids: Vec<_> = NAMES.into_iter().map(Lipid::new).collect();
    bencher.bench_local(|| {
        lipids
            .iter()
            .map(|lipid| convention.render(black_box(lipid)))
            .collect::<Vec<_>>()
    });
}
