use criterion::{criterion_group, criterion_main, Criterion, black_box};
use scraper::Html;

use jvms_prolog::specs::{errata, verifier};

/// Synthetic §4.10 of roughly the published size (~800 listings).
fn sample_page() -> String {
    let mut pres = String::new();
    for i in 0..800 {
        pres.push_str(&format!(
            r#"<pre class="programlisting">instructionIsTypeSafe(op{i}, Environment, _Offset, StackFrame,
                      NextStackFrame, ExceptionStackFrame) :-
    validTypeTransition(Environment, [int], int, StackFrame, NextStackFrame),
    exceptionStackFrame(StackFrame, ExceptionStackFrame).</pre>"#
        ));
    }
    pres.push_str(r#"<pre class="programlisting">isInit(Method).</pre>"#);
    for _ in 0..3 {
        pres.push_str(r#"<pre class="programlisting">appendix</pre>"#);
    }
    format!(r#"<html><body><div class="section"><a name="jvms-4.10"></a>{pres}</div></body></html>"#)
}

fn bench_extract(c: &mut Criterion) {
    let page = sample_page();
    let doc = Html::parse_document(&page);

    c.bench_function("parse_document", |b| {
        b.iter(|| Html::parse_document(black_box(&page)))
    });

    c.bench_function("extract_corrected", |b| {
        b.iter(|| verifier::extract(black_box(&doc), true).map(|s| s.len()))
    });

    c.bench_function("extract_raw", |b| {
        b.iter(|| verifier::extract(black_box(&doc), false).map(|s| s.len()))
    });

    c.bench_function("correct_block", |b| {
        b.iter(|| errata::correct(black_box("isInit(Method)."), true).len())
    });
}

criterion_group!(benches, bench_extract);
criterion_main!(benches);
