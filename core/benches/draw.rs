use criterion::*;

use polyview_core::prelude::*;

const W: u32 = 128;

/// Returns an `n`×`n` grid of quads in the xy-plane, spanning [-1, 1]².
fn grid(n: usize) -> (Vec<Point3>, Vec<Vec<usize>>) {
    let step = 2.0 / n as f32;
    let mut verts = vec![];
    for j in 0..=n {
        for i in 0..=n {
            verts.push(pt3(i as f32 * step - 1.0, j as f32 * step - 1.0, 0.0));
        }
    }
    let row = n + 1;
    let mut faces = vec![];
    for j in 0..n {
        for i in 0..n {
            let k = j * row + i;
            faces.push(vec![k, k + 1, k + row + 1, k + row]);
        }
    }
    (verts, faces)
}

fn setup(c: &mut Criterion) {
    let mut gl = Recorder::new();
    c.bench_function("setup", |b| {
        b.iter(|| {
            init_scene_lighting(&mut gl);
            apply_camera(&mut gl, 30, 20, -4.0, W, W);
            black_box(gl.take());
        })
    });
}

fn gouraud_fillrate(c: &mut Criterion) {
    let quad = [
        pt3(-1.0, -1.0, 0.0),
        pt3(1.0, -1.0, 0.0),
        pt3(1.0, 1.0, 0.0),
        pt3(-1.0, 1.0, 0.0),
    ];
    let colors = [
        rgb(1.0, 0.0, 0.0),
        rgb(0.0, 1.0, 0.0),
        rgb(0.0, 0.0, 1.0),
        rgb(1.0, 1.0, 1.0),
    ];
    let mut gl = Raster::new((W, W));
    apply_camera(&mut gl, 0, 0, -2.5, W, W);

    c.bench_function("gouraud", |b| {
        b.iter(|| {
            draw_mesh(&mut gl, &quad, &[0, 1, 2, 3], &colors).unwrap();
        })
    });
    eprintln!("{:#}", gl.stats);
}

fn lit_grid(c: &mut Criterion) {
    let (verts, faces) = grid(16);
    let colors = [rgb(0.9, 0.3, 0.2); 4];
    let mut gl = Raster::new((W, W));
    init_scene_lighting(&mut gl);

    c.bench_function("lit_grid", |b| {
        b.iter(|| {
            apply_camera(&mut gl, 30, 20, -4.0, W, W);
            for face in &faces {
                draw_mesh(&mut gl, &verts, face, &colors).unwrap();
            }
        })
    });
    eprintln!("{}", gl.stats);
}

criterion_group!(benches, setup, gouraud_fillrate, lit_grid);
criterion_main!(benches);
