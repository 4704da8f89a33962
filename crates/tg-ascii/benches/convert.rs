use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use tg_ascii::converter::Converter;
use tg_core::config::{ConvertConfig, Schedule};
use tg_core::frame::FrameBuffer;

fn noisy_frame(width: u32, height: u32) -> FrameBuffer {
    let mut frame = FrameBuffer::new(width, height);
    for y in 0..height {
        for x in 0..width {
            let v = x.wrapping_mul(31) ^ y.wrapping_mul(17);
            frame.set_pixel(x, y, (v as u8, (v >> 3) as u8, (v >> 5) as u8));
        }
    }
    frame
}

fn bench_convert(c: &mut Criterion) {
    let frame = noisy_frame(1920, 1080);
    let mut group = c.benchmark_group("convert_1080p");

    for schedule in [Schedule::Sequential, Schedule::Parallel] {
        for color in [false, true] {
            let converter = Converter::new(ConvertConfig {
                width: 200,
                scale: 0.5,
                color,
                schedule,
                ..ConvertConfig::default()
            });
            let Ok(converter) = converter else { continue };
            let id = format!("{schedule:?}/{}", if color { "color" } else { "plain" });
            group.bench_function(BenchmarkId::from_parameter(id), |b| {
                b.iter(|| converter.convert(black_box(&frame)));
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_convert);
criterion_main!(benches);
