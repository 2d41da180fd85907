use std::ops::ControlFlow::Continue;

use log::info;
use minifb::{Key, KeyRepeat};

use re::geom::Polyhedron;
use re::math::Color3f;
use re::render::init_scene_lighting;
use re_front::{dims::XGA_1024_768, minifb::Window};
use re_geom::solids::{Build, Dodecahedron, by_key};

/// Solids with this many vertices or more are drawn without edges.
const OUTLINE_MAX_VERTS: usize = 5000;

fn main() -> anyhow::Result<()> {
    env_logger::init();
    eprintln!("Press T, C, O, D, or I to select a solid, Esc to quit...");

    let mut win = Window::builder()
        .title("polyview")
        .dims(XGA_1024_768)
        .build()?;

    let mut poly = Dodecahedron.build();
    win.set_title(&title(&poly));

    let mut first = true;
    win.run(|frame| {
        if first {
            init_scene_lighting(frame.gl);
            first = false;
        }
        let keys = frame.win.imp.get_keys_pressed(KeyRepeat::No);
        if let Some(p) = keys.into_iter().filter_map(key_char).find_map(by_key) {
            info!("selected {}", p.name);
            poly = p;
            frame.win.set_title(&title(&poly));
        }

        poly.draw(frame.gl);
        if poly.vertex_count() < OUTLINE_MAX_VERTS {
            poly.draw_outline(frame.gl, Color3f::BLACK);
        }
        Continue(())
    })?;
    Ok(())
}

fn key_char(key: Key) -> Option<char> {
    Some(match key {
        Key::T => 'T',
        Key::C => 'C',
        Key::O => 'O',
        Key::D => 'D',
        Key::I => 'I',
        _ => return None,
    })
}

fn title(p: &Polyhedron) -> String {
    format!(
        "polyview [{}], faces: {}, vertices: {}",
        p.name,
        p.face_count(),
        p.vertex_count()
    )
}
