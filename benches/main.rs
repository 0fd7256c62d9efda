use divan::Bencher;
use strand::Strand;

fn main() {
    divan::main();
}

const S: &[u8] = &[42; 42];

#[divan::bench_group(sample_count = 10_000)]
mod from_slice {
    use super::*;

    #[divan::bench(args = [0, 1, 16, 23, 32, 42])]
    fn bench_strand_from_slice(n: usize) -> Strand {
        Strand::from(&S[0..n])
    }

    #[divan::bench(args = [0, 1, 16, 23, 32, 42])]
    fn bench_vec_from_slice(n: usize) -> Vec<u8> {
        Vec::from(&S[0..n])
    }
}

#[divan::bench_group(sample_count = 10_000)]
mod clone {
    use super::*;

    #[divan::bench(args = [0, 42, 1024])]
    fn bench_strand_clone(b: Bencher, n: usize) {
        let source = Strand::from(vec![42u8; n]);
        b.bench_local(|| source.clone());
    }

    #[divan::bench(args = [0, 42, 1024])]
    fn bench_vec_clone(b: Bencher, n: usize) {
        let source = vec![42u8; n];
        b.bench_local(|| source.clone());
    }
}

#[divan::bench_group(sample_count = 10_000)]
mod substr {
    use super::*;

    #[divan::bench(args = [42, 1024])]
    fn bench_strand_substr(b: Bencher, n: usize) {
        let source = Strand::from(vec![42u8; n]);
        b.bench_local(|| source.substr(1..n / 2));
    }

    #[divan::bench(args = [42, 1024])]
    fn bench_vec_subvec(b: Bencher, n: usize) {
        let source = vec![42u8; n];
        b.bench_local(|| source[1..n / 2].to_vec());
    }
}

#[divan::bench_group(sample_count = 1_000)]
mod push {
    use super::*;

    #[divan::bench(args = [42, 1024])]
    fn bench_strand_push(n: usize) -> Strand {
        let mut s = Strand::new();
        for _ in 0..n {
            s.push(42);
        }
        s
    }

    #[divan::bench(args = [42, 1024])]
    fn bench_vec_push(n: usize) -> Vec<u8> {
        let mut v = Vec::new();
        for _ in 0..n {
            v.push(42);
        }
        v
    }
}

#[divan::bench_group(sample_count = 10_000)]
mod search {
    use super::*;

    const HAYSTACK: &[u8] = b"abc##abc##abc##abc##abc##abc##abc##abc##abc##needle";

    #[divan::bench]
    fn bench_strand_find(b: Bencher) {
        let haystack = Strand::from_static(HAYSTACK);
        b.bench_local(|| haystack.find(b"needle"));
    }

    #[divan::bench]
    fn bench_strand_split(b: Bencher) {
        let haystack = Strand::from_static(HAYSTACK);
        b.bench_local(|| haystack.split(b"##").count());
    }
}
