use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use plugwise::messages::{
    BufferEntry, LogTimestamp, PingRequest, PowerBufferResponse, PowerInformationResponse,
};
use plugwise::protocol::checksum;
use plugwise::{MacAddress, Message};

const MAC: MacAddress = MacAddress::new(0x000D_6F00_00B1_B64B);

fn power_information() -> Message {
    Message::with_sequence(
        PowerInformationResponse::from_raw(MAC, 12, 96, 4_200, 0, 0x0140),
        0x0A3F,
    )
}

fn power_buffer() -> Message {
    let entry = |minutes, pulses| {
        Some(BufferEntry {
            timestamp: LogTimestamp {
                year: 24,
                month: 3,
                minutes,
            },
            pulses,
        })
    };
    Message::with_sequence(
        PowerBufferResponse {
            mac: MAC,
            entries: [
                entry(0xA1C0, 0x10),
                entry(0xA1FC, 0x20),
                entry(0xA238, 0x30),
                None,
            ],
            log_address: 1,
        },
        0x0B00,
    )
}

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("codec");

    // Smallest addressed frame
    let ping = Message::new(PingRequest::new(MAC));
    group.bench_function("encode_ping", |b| {
        b.iter(|| {
            black_box(ping.to_hex_string().unwrap());
        });
    });

    let info = power_information();
    group.bench_function("encode_power_information", |b| {
        b.iter(|| {
            black_box(info.to_hex_string().unwrap());
        });
    });

    // Widest frame
    let buffer = power_buffer();
    group.bench_function("encode_power_buffer", |b| {
        b.iter(|| {
            black_box(buffer.to_hex_string().unwrap());
        });
    });

    group.finish();
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("codec");

    let info = power_information().to_hex_string().unwrap();
    group.throughput(Throughput::Bytes(info.len() as u64));
    group.bench_function("decode_power_information", |b| {
        b.iter(|| {
            black_box(Message::decode(&info).unwrap());
        });
    });

    let buffer = power_buffer().to_hex_string().unwrap();
    group.throughput(Throughput::Bytes(buffer.len() as u64));
    group.bench_function("decode_power_buffer", |b| {
        b.iter(|| {
            black_box(Message::decode(&buffer).unwrap());
        });
    });

    group.finish();
}

fn bench_checksum(c: &mut Criterion) {
    let mut group = c.benchmark_group("checksum");

    let frame = power_buffer().to_hex_string().unwrap();
    let body = &frame[..frame.len() - 4];
    group.throughput(Throughput::Bytes(body.len() as u64));
    group.bench_function("crc16_power_buffer", |b| {
        b.iter(|| {
            black_box(checksum(black_box(body)));
        });
    });

    group.finish();
}

criterion_group!(benches, bench_encode, bench_decode, bench_checksum);
criterion_main!(benches);
