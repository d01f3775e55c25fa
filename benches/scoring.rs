//! Scoring benchmark: weighted scoring + classification over a batch.

use alert_triage::config::{FrequencyThreshold, ScoringConfig};
use alert_triage::{AlertRecord, Priority, RiskEngine};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn make_config() -> ScoringConfig {
    let mut config = ScoringConfig {
        frequency_threshold: Some(FrequencyThreshold { count: 5 }),
        ..ScoringConfig::default()
    };
    config
        .alert_type_weights
        .insert("malware".to_string(), 2.0);
    config.role_weights.insert("admin".to_string(), 2.0);
    config.ip_blacklist.insert("1.2.3.4".to_string());
    config
}

fn make_batch(n: usize) -> Vec<AlertRecord> {
    (0..n)
        .map(|i| AlertRecord {
            alert_id: format!("alert-{i}"),
            alert_type: if i % 3 == 0 { "malware" } else { "probe" }.to_string(),
            severity: (i % 10) as f64,
            alert_count: (i % 12) as u64,
            user_role: if i % 4 == 0 { "admin" } else { "user" }.to_string(),
            source_ip: if i % 7 == 0 { "1.2.3.4" } else { "8.8.8.8" }.to_string(),
        })
        .collect()
}

fn bench_score_batch(c: &mut Criterion) {
    let engine = RiskEngine::new(make_config());
    let batch = make_batch(1000);

    c.bench_function("score_1000_alerts", |b| {
        b.iter(|| {
            for record in black_box(&batch) {
                black_box(engine.score(record).unwrap());
            }
        })
    });
}

fn bench_score_and_classify(c: &mut Criterion) {
    let engine = RiskEngine::new(make_config());
    let batch = make_batch(1000);

    c.bench_function("score_and_classify_1000_alerts", |b| {
        b.iter(|| {
            for record in black_box(&batch) {
                let score = engine.score(record).unwrap();
                black_box(Priority::from_score(score));
            }
        })
    });
}

criterion_group!(benches, bench_score_batch, bench_score_and_classify);
criterion_main!(benches);
