use criterion::{criterion_group, criterion_main, Criterion};
use ondisk_blob_store::OnDiskBlob;
use tempfile::tempdir;


fn blob_benchmark(c: &mut Criterion) {
    let temp_dir = tempdir().unwrap();
    let path = temp_dir.path().join("bench_blob");
    let mut blob = OnDiskBlob::create_on_disk(&path, 64 * 1024).unwrap().unwrap();

    c.bench_function("flush 64KiB blob", |b| b.iter(|| {
        blob.data_mut()[0] = blob.data()[0].wrapping_add(1);
        blob.flush().unwrap();
    }));

    // iter_with_large_drop keeps the drop-time write-back out of the measurement.
    c.bench_function("load 64KiB blob", |b| b.iter_with_large_drop(|| {
        OnDiskBlob::load_from_disk(&path).unwrap().unwrap()
    }));

    blob.close().unwrap();
}

criterion_group!(benches, blob_benchmark);
criterion_main!(benches);
