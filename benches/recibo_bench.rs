use chrono::NaiveDate;
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use rust_decimal_macros::dec;

use recibo::core::*;
use recibo::extenso;
use recibo::payload;
use recibo::render;

fn test_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
}

fn build_request() -> ReceiptRequest {
    ReceiptRequestBuilder::new("Condomínio Jardim das Acácias", "Maria Souza", dec!(2500))
        .entity_code("EMP-042")
        .entity_tax_id("12345678000195")
        .balance_group("Despesas Administrativas")
        .balance_group_account("3.1.2.01")
        .bank("341", "Itaú")
        .agency("1234-5")
        .account("99887-0")
        .pix_key(PixKeyType::Cpf, "39053344705")
        .provider_tax_id("39053344705")
        .provider_pis("12056412547")
        .service_description("Pró-labore de síndico")
        .base_date(test_date())
        .issue_place("São Paulo")
        .build()
        .unwrap()
}

fn bench_build_request(c: &mut Criterion) {
    c.bench_function("build_request", |b| {
        b.iter(|| black_box(build_request()));
    });
}

fn bench_spell(c: &mut Criterion) {
    c.bench_function("spell_mixed_amount", |b| {
        b.iter(|| black_box(extenso::spell(black_box(dec!(987654.32)))));
    });
}

fn bench_assemble(c: &mut Criterion) {
    let request = build_request();
    let schedule = InstallmentSchedule::plan(test_date(), 12);
    c.bench_function("assemble_12_installments", |b| {
        b.iter(|| {
            black_box(payload::assemble(
                black_box(&request),
                black_box(&schedule),
                test_date(),
            ))
        });
    });
}

fn bench_fill_template(c: &mut Criterion) {
    let request = build_request();
    let schedule = InstallmentSchedule::plan(test_date(), 1);
    let payloads = payload::assemble(&request, &schedule, test_date());
    c.bench_function("fill_default_template", |b| {
        b.iter(|| {
            black_box(render::fill_template(
                black_box(render::DEFAULT_TEMPLATE),
                black_box(&payloads[0]),
            ))
        });
    });
}

criterion_group!(
    benches,
    bench_build_request,
    bench_spell,
    bench_assemble,
    bench_fill_template,
);
criterion_main!(benches);
