// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

use bytes::Bytes;
use courier::{
    build_request, validate, AcceptType, ContentType, ResponseEnvelope, ServiceDescription,
};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use serde_json::json;

fn build_benchmark(c: &mut Criterion) {
    let json_service = ServiceDescription::post("https://example.com/api/users")
        .content_type(ContentType::Json)
        .accept(AcceptType::Json)
        .header("x-request-id", "bench")
        .body(json!({
            "name": "Jane",
            "age": 30,
            "tags": ["a", "b", "c"],
            "address": {"city": "Helsinki", "zip": "00100"}
        }));

    let form_service = ServiceDescription::post("https://example.com/login")
        .content_type(ContentType::Form)
        .body(json!({"user": "John Doe", "password": "p@ss w0rd&more"}));

    c.bench_function("build_json_request", |b| {
        b.iter(|| build_request(black_box(&json_service)))
    });

    c.bench_function("build_form_request", |b| {
        b.iter(|| build_request(black_box(&form_service)))
    });
}

fn validate_benchmark(c: &mut Criterion) {
    let service = ServiceDescription::get("https://example.com/api/users").accept(AcceptType::Json);

    let mut headers = HeaderMap::new();
    headers.insert(
        CONTENT_TYPE,
        HeaderValue::from_static("application/json; charset=utf-8"),
    );
    let body = Bytes::from(
        serde_json::to_vec(&json!({
            "users": (0..50).map(|i| json!({"id": i, "name": format!("user{}", i)})).collect::<Vec<_>>()
        }))
        .unwrap(),
    );
    let response = ResponseEnvelope::new(200, headers, Some(body));

    c.bench_function("validate_and_parse_json", |b| {
        b.iter(|| validate(black_box(&service), response.clone()))
    });
}

criterion_group!(benches, build_benchmark, validate_benchmark);
criterion_main!(benches);
