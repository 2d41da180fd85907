//! Rendering statistics.

use alloc::{format, string::String};
use core::fmt::{self, Display, Formatter};
use core::ops::AddAssign;
use core::time::Duration;
#[cfg(feature = "std")]
use std::time::Instant;

/// Collects and accumulates rendering statistics and performance data.
#[derive(Clone, Debug, Default)]
pub struct Stats {
    /// Time spent rendering.
    pub time: Duration,
    /// Number of frames rendered.
    pub frames: u32,
    /// Number of primitives (begin–end pairs) completed.
    pub calls: u32,

    /// Triangles and line segments submitted and drawn.
    pub prims: Throughput,
    /// Vertices submitted and transformed.
    pub verts: Throughput,
    /// Fragments covered and written.
    pub frags: Throughput,

    #[cfg(feature = "std")]
    start: Option<Instant>,
}

/// Count of items going in and out of a pipeline stage.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct Throughput {
    /// Count of items submitted.
    pub i: usize,
    /// Count of items output.
    pub o: usize,
}

impl Stats {
    /// Creates a new zeroed `Stats` instance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a `Stats` instance that records the time of its creation.
    ///
    /// Call [`finish`][Self::finish] to write the elapsed time to `self.time`.
    /// Equivalent to [`Stats::new`] if the `std` feature is not enabled.
    pub fn start() -> Self {
        Self {
            #[cfg(feature = "std")]
            start: Some(Instant::now()),
            ..Self::default()
        }
    }

    /// Stops the timer and records the elapsed time to `self.time`.
    ///
    /// No-op if the timer was not running, or if the `std` feature is not
    /// enabled.
    pub fn finish(self) -> Self {
        Self {
            #[cfg(feature = "std")]
            time: self.start.map(|st| st.elapsed()).unwrap_or(self.time),
            #[cfg(feature = "std")]
            start: None,
            ..self
        }
    }

    /// Returns the average number of frames per second, or zero if no time
    /// has been recorded.
    pub fn fps(&self) -> f32 {
        let secs = self.time.as_secs_f32();
        if secs > 0.0 { self.frames as f32 / secs } else { 0.0 }
    }

    fn throughput(&self) -> [(&'static str, Throughput); 3] {
        [("prims", self.prims), ("verts", self.verts), ("frags", self.frags)]
    }
}

impl Display for Stats {
    /// Writes a summary table of `self`.
    ///
    /// With the alternate flag `#`, throughputs are shown as the percentage
    /// of items output.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let frames = self.frames.max(1) as f32;
        writeln!(
            f,
            " frames {:>8} │ {:>8} │ {:7.1} fps",
            self.frames,
            human_time(self.time),
            self.fps()
        )?;
        writeln!(
            f,
            " calls  {:>8} │ {:7.1} per frame",
            self.calls,
            self.calls as f32 / frames
        )?;
        for (lbl, t) in self.throughput() {
            if f.alternate() {
                writeln!(f, " {lbl:6} {t:#}")?;
            } else {
                writeln!(f, " {lbl:6} {t}")?;
            }
        }
        Ok(())
    }
}

impl Display for Throughput {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let &Self { i, o } = self;
        if !f.alternate() {
            write!(f, "{} in, {} out", human_num(i), human_num(o))
        } else if i == 0 {
            write!(f, "{:>6}", "--")
        } else {
            write!(f, "{:5.1}%", 100.0 * o as f32 / i as f32)
        }
    }
}

impl AddAssign for Stats {
    /// Appends the stats of `other` to `self`.
    fn add_assign(&mut self, other: Self) {
        self.time += other.time;
        self.frames += other.frames;
        self.calls += other.calls;
        self.prims += other.prims;
        self.verts += other.verts;
        self.frags += other.frags;
    }
}

impl AddAssign for Throughput {
    fn add_assign(&mut self, rhs: Self) {
        self.i += rhs.i;
        self.o += rhs.o;
    }
}

fn human_num(n: usize) -> String {
    if n < 1_000 {
        format!("{n:5}")
    } else if n < 100_000 {
        format!("{:4.1}k", n as f32 / 1e3)
    } else if n < 1_000_000 {
        format!("{:4}k", n / 1_000)
    } else if n < 100_000_000 {
        format!("{:4.1}M", n as f32 / 1e6)
    } else {
        format!("{:4}M", n / 1_000_000)
    }
}

fn human_time(d: Duration) -> String {
    let secs = d.as_secs_f32();
    if secs < 1e-3 {
        format!("{:.1}μs", secs * 1e6)
    } else if secs < 1.0 {
        format!("{:.1}ms", secs * 1e3)
    } else if secs < 60.0 {
        format!("{secs:.1}s")
    } else {
        format!("{}min {:02}s", d.as_secs() / 60, d.as_secs() % 60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats() -> Stats {
        Stats {
            time: Duration::from_secs(2),
            frames: 100,
            calls: 600,
            prims: Throughput { i: 1234, o: 567 },
            verts: Throughput { i: 40, o: 40 },
            frags: Throughput { i: 0, o: 0 },
            ..Stats::default()
        }
    }

    #[test]
    fn stats_display() {
        assert_eq!(
            format!("{}", stats()),
            " frames      100 │     2.0s │    50.0 fps\n\
             \x20calls       600 │     6.0 per frame\n\
             \x20prims   1.2k in,   567 out\n\
             \x20verts     40 in,    40 out\n\
             \x20frags      0 in,     0 out\n"
        );
    }

    #[test]
    fn stats_display_alternate() {
        let s = format!("{:#}", stats());
        assert!(s.contains(" verts  100.0%\n"), "{s}");
        assert!(s.contains(" frags      --\n"), "{s}");
    }

    #[test]
    fn add_assign_accumulates() {
        let mut total = Stats::new();
        total += stats();
        total += stats();
        assert_eq!(total.frames, 200);
        assert_eq!(total.time, Duration::from_secs(4));
        assert_eq!(total.prims, Throughput { i: 2468, o: 1134 });
        assert_eq!(total.fps(), 50.0);
    }

    #[test]
    fn fps_without_time_is_zero() {
        assert_eq!(Stats::new().fps(), 0.0);
    }

    #[test]
    fn human_nums() {
        assert_eq!(human_num(10), "   10");
        assert_eq!(human_num(1_234), " 1.2k");
        assert_eq!(human_num(123_456), " 123k");
        assert_eq!(human_num(1_234_567), " 1.2M");
        assert_eq!(human_num(123_456_789), " 123M");
    }

    #[test]
    fn human_times() {
        assert_eq!(human_time(Duration::from_micros(123)), "123.0μs");
        assert_eq!(human_time(Duration::from_millis(123)), "123.0ms");
        assert_eq!(human_time(Duration::from_millis(1234)), "1.2s");
        assert_eq!(human_time(Duration::from_secs(1234)), "20min 34s");
    }
}
