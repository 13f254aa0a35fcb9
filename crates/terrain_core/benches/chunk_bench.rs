//! Benchmarks for chunk meshing and ground queries.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use terrain_core::noise::NoiseContext;
use terrain_core::{
	BaseColor, ChunkCoord, GroundCollision, HeightField, InputState, MotionTuning, PlayerState,
	TerrainChunkBuilder, TerrainLayout,
};

fn field_for(layout: &TerrainLayout, seed: u32) -> HeightField {
	HeightField::new(NoiseContext::new(seed), layout.falloff_center())
}

/// Build cost against chunk edge length.
fn bench_chunk_build(c: &mut Criterion) {
	let mut group = c.benchmark_group("chunk_build");
	group.sample_size(20);

	for size in [32usize, 64, 128, 216] {
		let layout = TerrainLayout::for_seed(42).with_chunk_size(size);
		let field = field_for(&layout, 42);
		let builder = TerrainChunkBuilder::new(&field, BaseColor([0.6, 0.5, 0.4])).with_size(size);

		group.throughput(Throughput::Elements((size * size) as u64));
		group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
			b.iter(|| black_box(builder.build(ChunkCoord::new(1, 0))))
		});
	}

	group.finish();
}

fn bench_mesh_buffers(c: &mut Criterion) {
	let layout = TerrainLayout::for_seed(42);
	let field = field_for(&layout, 42);
	let chunk = TerrainChunkBuilder::new(&field, BaseColor([0.6, 0.5, 0.4])).build(ChunkCoord::new(0, 0));

	c.bench_function("chunk_to_buffers/216", |b| b.iter(|| black_box(chunk.to_buffers())));
}

/// One simulation step with collision, walking forward.
fn bench_collision_step(c: &mut Criterion) {
	let layout = TerrainLayout::for_seed(42);
	let field = field_for(&layout, 42);
	let collision = GroundCollision::new(layout, MotionTuning::default());
	let input = InputState {
		move_forward: true,
		..Default::default()
	};

	c.bench_function("collision_step", |b| {
		let mut player = PlayerState::spawn();
		b.iter(|| {
			let ground = collision.step(&field, &mut player, &input);
			// Keep the walk inside the terrain
			if player.position[0].abs() > 400.0 || player.position[2].abs() > 400.0 {
				player = PlayerState::spawn();
			}
			black_box(ground)
		})
	});
}

criterion_group!(benches, bench_chunk_build, bench_mesh_buffers, bench_collision_step);
criterion_main!(benches);
