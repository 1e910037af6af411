use chrono::DateTime;
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use std::sync::Arc;
use tracy::{
    FixedClock, Formatter, JsonFormatter, LogLevel, Prop, Props, Syslog3164Formatter,
    Syslog5424Formatter, SyslogConfig,
};

fn create_props(count: usize) -> Props {
    (0..count)
        .map(|i| Prop::new(format!("field_{i}"), format!("value \"{i}\" ]")))
        .collect()
}

fn formatter_benchmarks(c: &mut Criterion) {
    let clock = FixedClock(DateTime::parse_from_rfc3339("2024-01-01T00:00:00Z").unwrap());
    let config = SyslogConfig {
        app_name: Some("bench".to_string()),
        hostname: Some("bench-host".to_string()),
        ..Default::default()
    }
    .with_clock(clock);

    let formatters: Vec<(&str, Arc<dyn Formatter>)> = vec![
        ("json", Arc::new(JsonFormatter::compact())),
        ("json_pretty", Arc::new(JsonFormatter::pretty("  "))),
        ("syslog_rfc3164", Arc::new(Syslog3164Formatter::new(config.clone()))),
        ("syslog_rfc5424", Arc::new(Syslog5424Formatter::new(config))),
    ];

    let mut group = c.benchmark_group("format");
    for prop_count in [0, 4, 16] {
        let props = create_props(prop_count);
        for (name, formatter) in &formatters {
            group.bench_with_input(BenchmarkId::new(*name, prop_count), &props, |b, props| {
                b.iter(|| {
                    formatter.format(
                        black_box(LogLevel::Warning),
                        black_box("request completed"),
                        black_box(props),
                    )
                });
            });
        }
    }
    group.finish();
}

criterion_group!(benches, formatter_benchmarks);
criterion_main!(benches);
