//! Topic 3: references, structs, arrays, slices, maps and closures.

use super::listing;
use crate::catalogue::Catalogue;
use crate::error::CatalogueError;
use std::collections::{BTreeMap, HashMap};
use std::io::{self, Write};
use std::ops::Range;

pub fn register(catalogue: &mut Catalogue) -> Result<(), CatalogueError> {
    catalogue.register_titled("3.1", "references", references)?;
    catalogue.register_titled("3.2", "structs", structs)?;
    catalogue.register_titled("3.3", "field access", field_access)?;
    catalogue.register_titled("3.4", "fields through &mut", fields_through_ref)?;
    catalogue.register_titled("3.5", "struct literals", struct_literals)?;
    catalogue.register_titled("3.6", "arrays", arrays)?;
    catalogue.register_titled("3.7", "slices", slices)?;
    catalogue.register_titled("3.8", "slices share storage", shared_storage)?;
    catalogue.register_titled("3.9", "vec literals", vec_literals)?;
    catalogue.register_titled("3.10", "slice bounds", slice_bounds)?;
    catalogue.register_titled("3.11", "length and capacity", length_and_capacity)?;
    catalogue.register_titled("3.12", "empty vec", empty_vec)?;
    catalogue.register_titled("3.13", "allocating vecs", allocating_vecs)?;
    catalogue.register_titled("3.14", "nested vecs", tic_tac_toe)?;
    catalogue.register_titled("3.15", "push and extend", push_and_extend)?;
    catalogue.register_titled("3.16", "enumerate", enumerate)?;
    catalogue.register_titled("3.17", "skipping the index", skip_index)?;
    catalogue.register_titled("3.18", "picture grid", picture_grid)?;
    catalogue.register_titled("3.19", "maps", maps)?;
    catalogue.register_titled("3.20", "map literals", map_literals)?;
    catalogue.register_titled("3.21", "entry api", entry_api)?;
    catalogue.register_titled("3.22", "mutating maps", mutating_maps)?;
    catalogue.register_titled("3.23", "word count", word_count_drill)?;
    catalogue.register_titled("3.24", "function values", function_values)?;
    catalogue.register_titled("3.25", "closures", closures)?;
    catalogue.register_titled("3.26", "fibonacci closure", fibonacci_drill)?;
    Ok(())
}

fn references(out: &mut dyn Write) -> io::Result<()> {
    let (mut i, mut j) = (42, 2701);

    let mut p = &mut i;
    writeln!(out, "{}", *p)?; // read i through p
    *p = 21; // set i through p
    writeln!(out, "{i}")?;

    p = &mut j;
    *p /= 37;
    writeln!(out, "{j}")
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct Vertex {
    x: i32,
    y: i32,
}

fn structs(out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "{:?}", Vertex { x: 1, y: 2 })
}

fn field_access(out: &mut dyn Write) -> io::Result<()> {
    let mut v = Vertex { x: 1, y: 2 };
    v.x = 4;
    writeln!(out, "{v:?}")
}

fn fields_through_ref(out: &mut dyn Write) -> io::Result<()> {
    let mut v = Vertex { x: 1, y: 2 };
    let p = &mut v;
    p.x = 1_000_000_000; // auto-deref, no (*p).x needed
    writeln!(out, "{v:?}")
}

fn struct_literals(out: &mut dyn Write) -> io::Result<()> {
    let v1 = Vertex { x: 1, y: 2 };
    let v2 = Vertex {
        x: 1,
        ..Default::default()
    };
    let v3 = Vertex::default();
    let p = &Vertex { x: 10, y: 20 };
    writeln!(out, "{v1:?} {p:?} {v2:?} {v3:?}")?;
    writeln!(out, "{}", p.x)
}

fn arrays(out: &mut dyn Write) -> io::Result<()> {
    let mut a: [String; 2] = Default::default();
    let b = [0.0f64; 3];
    writeln!(out, "{a:?}")?;
    writeln!(out, "{b:?}")?;

    a[0] = "Hello".to_string();
    a[1] = "World".to_string();
    writeln!(out, "{} {}", a[0], a[1])?;
    writeln!(out, "{a:?}")?;

    let primes = [2, 3, 5, 7, 11, 13];
    writeln!(out, "{}", listing(&primes))?;

    let mut y = [0; 5];
    y[..3].copy_from_slice(&[10, 20, 30]);
    writeln!(out, "{}", listing(&y))
}

fn slices(out: &mut dyn Write) -> io::Result<()> {
    let primes = [2, 3, 5, 7, 11, 13];
    let s: &[i32] = &primes[1..4];
    writeln!(out, "{}", listing(s))
}

fn shared_storage(out: &mut dyn Write) -> io::Result<()> {
    let mut names = ["John", "Paul", "George", "Ringo"];
    writeln!(out, "{}", listing(&names))?;
    writeln!(out, "{} {}", listing(&names[0..2]), listing(&names[1..3]))?;

    // a write through one view is visible through every view of the array
    {
        let b = &mut names[1..3];
        b[0] = "XXX";
    }
    writeln!(out, "{} {}", listing(&names[0..2]), listing(&names[1..3]))?;
    writeln!(out, "{}", listing(&names))
}

fn vec_literals(out: &mut dyn Write) -> io::Result<()> {
    let q = vec![2, 3, 5, 7, 11, 13];
    writeln!(out, "{}", listing(&q))?;

    let r = vec![true, false, true, true, false, true];
    writeln!(out, "{}", listing(&r))?;

    let s: Vec<(i32, bool)> = vec![(2, true), (3, false), (5, true), (7, true), (11, false), (13, true)];
    writeln!(out, "{s:?}")
}

fn slice_bounds(out: &mut dyn Write) -> io::Result<()> {
    let s = [2, 3, 5, 7, 11, 13];
    let s = &s[..];
    writeln!(out, "{}", listing(s))?;
    let s = &s[1..4];
    writeln!(out, "{}", listing(s))?;
    let s = &s[..2];
    writeln!(out, "{}", listing(s))?;
    let s = &s[1..];
    writeln!(out, "{}", listing(s))
}

/// Describes a window into `backing`. `cap` counts from the window start to
/// the end of the backing storage, the room the window could grow into.
/// A window that does not fit inside `backing` is reported, not sliced.
pub fn describe_window(backing: &[i32], window: Range<usize>) -> String {
    let cap = backing.len().saturating_sub(window.start);
    match backing.get(window.clone()) {
        Some(view) => format!("len={} cap={} {}", view.len(), cap, listing(view)),
        None => format!("window {window:?} out of range for len={}", backing.len()),
    }
}

fn length_and_capacity(out: &mut dyn Write) -> io::Result<()> {
    let backing = [2, 3, 5, 7, 11, 13];
    writeln!(out, "{}", describe_window(&backing, 0..6))?;
    // zero length, same start
    writeln!(out, "{}", describe_window(&backing, 0..0))?;
    // grown back out
    writeln!(out, "{}", describe_window(&backing, 0..4))?;
    // first two dropped
    writeln!(out, "{}", describe_window(&backing, 2..4))
}

fn empty_vec(out: &mut dyn Write) -> io::Result<()> {
    let s: Vec<i32> = Vec::new();
    writeln!(out, "{} {} {}", listing(&s), s.len(), s.capacity())?;
    if s.is_empty() {
        writeln!(out, "empty!")?;
    }
    // indexing would panic; first() reports absence instead
    writeln!(out, "s.first() = {:?}", s.first())
}

fn allocating_vecs(out: &mut dyn Write) -> io::Result<()> {
    let a = vec![0; 5];
    writeln!(out, "a len={} {}", a.len(), listing(&a))?;

    let mut b: Vec<i32> = Vec::with_capacity(5);
    writeln!(out, "b len={} cap>={} {}", b.len(), b.capacity(), listing(&b))?;

    b.resize(2, 0);
    writeln!(out, "c len={} {}", b.len(), listing(&b))?;

    b.resize(5, 0);
    writeln!(out, "d len={} {}", b[2..].len(), listing(&b[2..]))
}

fn tic_tac_toe(out: &mut dyn Write) -> io::Result<()> {
    let mut board = vec![vec!["_"; 3]; 3];

    board[0][0] = "X";
    board[2][2] = "O";
    board[1][2] = "X";
    board[1][0] = "O";
    board[0][2] = "X";

    for row in &board {
        writeln!(out, "{}", row.join(" "))?;
    }
    Ok(())
}

fn push_and_extend(out: &mut dyn Write) -> io::Result<()> {
    let mut s: Vec<i32> = Vec::new();
    writeln!(out, "len={} {}", s.len(), listing(&s))?;

    s.push(0);
    writeln!(out, "len={} {}", s.len(), listing(&s))?;

    s.push(1);
    writeln!(out, "len={} {}", s.len(), listing(&s))?;

    s.extend([2, 3, 4]);
    writeln!(out, "len={} cap>={} {}", s.len(), s.capacity(), listing(&s))
}

fn enumerate(out: &mut dyn Write) -> io::Result<()> {
    let pow = [1, 2, 4, 8, 16, 32, 64, 128];
    for (i, v) in pow.iter().enumerate() {
        writeln!(out, "2**{i} = {v}")?;
    }
    Ok(())
}

fn skip_index(out: &mut dyn Write) -> io::Result<()> {
    let mut pow = [0u32; 10];
    for (i, slot) in pow.iter_mut().enumerate() {
        *slot = 1 << i;
    }
    for value in pow {
        writeln!(out, "{value}")?;
    }
    Ok(())
}

/// `dy` rows of `dx` pixels, each `(x + y) / 2`.
pub fn picture(dx: usize, dy: usize) -> Vec<Vec<u8>> {
    (0..dy)
        .map(|y| (0..dx).map(|x| ((x + y) / 2) as u8).collect())
        .collect()
}

fn picture_grid(out: &mut dyn Write) -> io::Result<()> {
    for row in picture(6, 4) {
        writeln!(out, "{}", listing(&row))?;
    }
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Coordinate {
    lat: f64,
    long: f64,
}

fn maps(out: &mut dyn Write) -> io::Result<()> {
    let mut m: HashMap<String, Coordinate> = HashMap::new();
    m.insert(
        "Bell Labs".to_string(),
        Coordinate {
            lat: 40.68433,
            long: -74.39967,
        },
    );
    writeln!(out, "{:?}", m["Bell Labs"])
}

fn map_literals(out: &mut dyn Write) -> io::Result<()> {
    let m = BTreeMap::from([
        ("Bell Labs", Coordinate { lat: 40.68433, long: -74.39967 }),
        ("Google", Coordinate { lat: 37.42202, long: -122.08408 }),
    ]);
    for (name, coordinate) in &m {
        writeln!(out, "{name}: {} {}", coordinate.lat, coordinate.long)?;
    }
    Ok(())
}

fn entry_api(out: &mut dyn Write) -> io::Result<()> {
    let mut visits: BTreeMap<&str, u32> = BTreeMap::new();
    for site in ["Google", "Bell Labs", "Google"] {
        *visits.entry(site).or_insert(0) += 1;
    }
    writeln!(out, "{visits:?}")
}

fn mutating_maps(out: &mut dyn Write) -> io::Result<()> {
    let mut m: HashMap<&str, i32> = HashMap::new();

    m.insert("Answer", 42);
    writeln!(out, "The value: {}", m["Answer"])?;

    m.insert("Answer", 48);
    writeln!(out, "The value: {}", m["Answer"])?;

    m.insert("Lucky", 7);
    writeln!(out, "The value: {}", m["Lucky"])?;

    m.remove("Answer");
    writeln!(out, "The value: {}", m.get("Answer").copied().unwrap_or_default())?;

    let answer = m.get("Answer");
    let lucky = m.get("Lucky");
    writeln!(out, "The value: {:?} Present? {}", answer, answer.is_some())?;
    writeln!(out, "The value: {:?} Present? {}", lucky, lucky.is_some())
}

pub fn word_count(s: &str) -> HashMap<&str, usize> {
    let mut counts = HashMap::new();
    for word in s.split_whitespace() {
        *counts.entry(word).or_insert(0) += 1;
    }
    counts
}

fn word_count_drill(out: &mut dyn Write) -> io::Result<()> {
    let counts: BTreeMap<_, _> = word_count("I ate a donut. Then I ate another donut.")
        .into_iter()
        .collect();
    writeln!(out, "{counts:?}")
}

pub fn compute(f: impl Fn(f64, f64) -> f64) -> f64 {
    f(3.0, 4.0)
}

fn function_values(out: &mut dyn Write) -> io::Result<()> {
    let hypot = |x: f64, y: f64| (x * x + y * y).sqrt();
    writeln!(out, "{}", hypot(5.0, 12.0))?;
    writeln!(out, "{}", compute(hypot))?;
    writeln!(out, "{}", compute(f64::powf))
}

/// Running total; each call adds its argument and returns the new sum.
pub fn adder() -> impl FnMut(i32) -> i32 {
    let mut sum = 0;
    move |x| {
        sum += x;
        sum
    }
}

fn closures(out: &mut dyn Write) -> io::Result<()> {
    let (mut pos, mut neg) = (adder(), adder());
    for i in 0..10 {
        writeln!(out, "{} {}", pos(i), neg(-2 * i))?;
    }
    Ok(())
}

pub fn fibonacci() -> impl FnMut() -> u64 {
    let (mut prev, mut cur) = (0u64, 1u64);
    move || {
        let res = prev;
        // wraps past fib(93), the last value that fits in u64
        (prev, cur) = (cur, prev.wrapping_add(cur));
        res
    }
}

fn fibonacci_drill(out: &mut dyn Write) -> io::Result<()> {
    let mut f = fibonacci();
    for _ in 0..10 {
        writeln!(out, "{}", f())?;
    }
    Ok(())
}
