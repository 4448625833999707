use criterion::{criterion_group, criterion_main, Criterion, black_box};

use contact_scrape::specs::contacts;

fn sample_page(n: usize) -> String {
    let mut doc = String::from("<html><body>\n");
    for i in 0..n {
        doc.push_str(&format!(
            r#"<div class="staff"><a href="/p/{i}.php"><img src="{i}.jpg" alt="Person {i}"></a>
<table><tr><td>職　　稱：</td><td>Lecturer</td></tr>
<tr><td>電子郵件 :</td><td><a href="mailto:p{i}@example.edu">mail</a></td></tr>
<tr><td>聯絡電話 :</td><td>(04)2392-4505 #{:04}</td></tr></table></div>
"#,
            i % 10_000
        ));
    }
    doc.push_str("</body></html>\n");
    doc
}

fn bench_extract(c: &mut Criterion) {
    let small = sample_page(20);
    let large = sample_page(500);

    c.bench_function("extract_20", |b| {
        b.iter(|| black_box(contacts::extract(black_box(&small)).len()))
    });

    c.bench_function("extract_500", |b| {
        b.iter(|| black_box(contacts::extract(black_box(&large)).len()))
    });
}

criterion_group!(benches, bench_extract);
criterion_main!(benches);
