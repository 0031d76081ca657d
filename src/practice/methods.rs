//! Topic 4: methods, receivers, trait objects and dynamic values.

use crate::catalogue::Catalogue;
use crate::error::CatalogueError;
use crate::shapes::{abs_of, scale_in_place, Ipv4, Measurable, Person, Point, Scalar};
use std::any::{type_name, Any};
use std::collections::BTreeMap;
use std::f64::consts::{PI, SQRT_2};
use std::fmt;
use std::io::{self, Write};

pub fn register(catalogue: &mut Catalogue) -> Result<(), CatalogueError> {
    catalogue.register_titled("4.1", "methods", methods)?;
    catalogue.register_titled("4.2", "methods are functions", methods_are_functions)?;
    catalogue.register_titled("4.3", "methods on newtypes", newtype_methods)?;
    catalogue.register_titled("4.4", "&mut self vs self", receivers)?;
    catalogue.register_titled("4.5", "&mut arguments vs copies", argument_ownership)?;
    catalogue.register_titled("4.6", "auto-ref on method calls", auto_ref)?;
    catalogue.register_titled("4.7", "auto-deref on method calls", auto_deref)?;
    catalogue.register_titled("4.8", "choosing a receiver", choosing_receiver)?;
    catalogue.register_titled("4.9", "trait objects", trait_objects)?;
    catalogue.register_titled("4.10", "explicit impls", explicit_impls)?;
    catalogue.register_titled("4.11", "trait object values", trait_object_values)?;
    catalogue.register_titled("4.12", "absent receivers", absent_receivers)?;
    catalogue.register_titled("4.13", "absent trait objects", absent_trait_objects)?;
    catalogue.register_titled("4.14", "any values", any_values)?;
    catalogue.register_titled("4.15", "checked downcast", checked_downcast)?;
    catalogue.register_titled("4.16", "type switch", type_switch)?;
    catalogue.register_titled("4.17", "display", display)?;
    catalogue.register_titled("4.18", "display for newtypes", display_newtypes)?;
    Ok(())
}

fn methods(out: &mut dyn Write) -> io::Result<()> {
    let v = Point::new(3.0, 4.0);
    writeln!(out, "{}", v.abs())
}

fn methods_are_functions(out: &mut dyn Write) -> io::Result<()> {
    let v = Point::new(3.0, 4.0);
    writeln!(out, "{}", abs_of(v))
}

fn newtype_methods(out: &mut dyn Write) -> io::Result<()> {
    let f = Scalar(-SQRT_2);
    writeln!(out, "{}", f.abs())
}

fn receivers(out: &mut dyn Write) -> io::Result<()> {
    let mut v = Point::new(3.0, 4.0);
    let v2 = Point::new(3.0, 4.0);

    v.scale(10.0);
    // scaled() takes its own copy; the result is dropped and v2 stays put
    let _ = v2.scaled(10.0);

    writeln!(out, "{}", v.abs())?;
    writeln!(out, "{}", v2.abs())
}

fn argument_ownership(out: &mut dyn Write) -> io::Result<()> {
    let mut v = Point::new(3.0, 4.0);
    let _ = v.scaled(10.0);
    writeln!(out, "{}", abs_of(v))?;
    scale_in_place(&mut v, 10.0);
    writeln!(out, "{}", abs_of(v))
}

fn auto_ref(out: &mut dyn Write) -> io::Result<()> {
    let mut v = Point::new(3.0, 4.0);
    v.scale(2.0); // (&mut v).scale(2.0)
    scale_in_place(&mut v, 10.0);

    let p = &mut Point::new(4.0, 3.0);
    p.scale(3.0);
    scale_in_place(p, 8.0);

    writeln!(out, "{v} {p}")
}

fn auto_deref(out: &mut dyn Write) -> io::Result<()> {
    let v = Point::new(3.0, 4.0);
    writeln!(out, "{}", v.abs())?;
    writeln!(out, "{}", abs_of(v))?;

    let p = &Point::new(4.0, 3.0);
    writeln!(out, "{}", p.abs())?;
    writeln!(out, "{}", abs_of(*p))
}

fn choosing_receiver(out: &mut dyn Write) -> io::Result<()> {
    let v = &mut Point::new(3.0, 4.0);
    writeln!(out, "Before scaling: {v:?}, Abs: {}", v.abs())?;
    v.scale(5.0);
    writeln!(out, "After scaling: {v:?}, Abs: {}", v.abs())
}

fn trait_objects(out: &mut dyn Write) -> io::Result<()> {
    let f = Scalar(-SQRT_2);
    let v = Point::new(3.0, 4.0);

    let mut a: &dyn Measurable = &f;
    writeln!(out, "{}", a.abs())?;
    a = &v;
    writeln!(out, "{}", a.abs())
}

// =============================================================================
// Announcing values through a trait
// =============================================================================

pub trait Announce: fmt::Debug {
    fn announce(&self, out: &mut dyn Write) -> io::Result<()>;

    fn kind(&self) -> &'static str {
        type_name::<Self>()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub text: String,
}

impl Message {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl Announce for Message {
    fn announce(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "{}", self.text)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Angle(pub f64);

impl Announce for Angle {
    fn announce(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "{}", self.0)
    }
}

/// A message that may not be there; announcing it is still well-defined.
impl Announce for Option<Message> {
    fn announce(&self, out: &mut dyn Write) -> io::Result<()> {
        match self {
            Some(message) => message.announce(out),
            None => writeln!(out, "<none>"),
        }
    }
}

fn describe(value: &dyn Announce) -> String {
    let kind = value.kind();
    format!("({value:?}, {})", kind.rsplit("::").next().unwrap_or(kind))
}

fn explicit_impls(out: &mut dyn Write) -> io::Result<()> {
    let i: Box<dyn Announce> = Box::new(Message::new("hello"));
    i.announce(out)
}

fn trait_object_values(out: &mut dyn Write) -> io::Result<()> {
    let mut i: Box<dyn Announce> = Box::new(Message::new("hello"));
    writeln!(out, "{}", describe(&*i))?;
    i.announce(out)?;

    i = Box::new(Angle(PI));
    writeln!(out, "{}", describe(&*i))?;
    i.announce(out)
}

fn absent_receivers(out: &mut dyn Write) -> io::Result<()> {
    let mut i: Box<dyn Announce> = Box::new(None::<Message>);
    writeln!(out, "{:?}", i)?;
    i.announce(out)?;

    i = Box::new(Some(Message::new("hello")));
    writeln!(out, "{:?}", i)?;
    i.announce(out)
}

fn absent_trait_objects(out: &mut dyn Write) -> io::Result<()> {
    let i: Option<Box<dyn Announce>> = None;
    // no value and no type: there is nothing to dispatch to
    match i {
        Some(value) => value.announce(out),
        None => writeln!(out, "nothing to announce"),
    }
}

// =============================================================================
// Dynamic values
// =============================================================================

/// Renders a dynamically typed value for the handful of types it knows.
pub fn describe_any(value: Option<&dyn Any>) -> String {
    let Some(value) = value else {
        return "(none)".to_string();
    };
    if let Some(n) = value.downcast_ref::<i32>() {
        format!("({n}, i32)")
    } else if let Some(s) = value.downcast_ref::<&str>() {
        format!("({s}, &str)")
    } else if let Some(s) = value.downcast_ref::<String>() {
        format!("({s}, String)")
    } else {
        "(?, unknown)".to_string()
    }
}

fn any_values(out: &mut dyn Write) -> io::Result<()> {
    let mut i: Option<Box<dyn Any>> = None;
    writeln!(out, "{}", describe_any(i.as_deref()))?;

    i = Some(Box::new(42i32) as Box<dyn Any>);
    writeln!(out, "{}", describe_any(i.as_deref()))?;

    i = Some(Box::new("hello") as Box<dyn Any>);
    writeln!(out, "{}", describe_any(i.as_deref()))
}

fn checked_downcast(out: &mut dyn Write) -> io::Result<()> {
    let i: Box<dyn Any> = Box::new("hello");

    let s = i.downcast_ref::<&str>();
    writeln!(out, "{s:?} {}", s.is_some())?;

    // the wrong type is an empty Option, never a panic
    let f = i.downcast_ref::<f64>();
    writeln!(out, "{f:?} {}", f.is_some())
}

pub fn classify<T: Any>(value: &T) -> String {
    let any = value as &dyn Any;
    if let Some(v) = any.downcast_ref::<i32>() {
        format!("Twice {v} is {}", v * 2)
    } else if let Some(v) = any.downcast_ref::<&str>() {
        format!("{v:?} is {} bytes long", v.len())
    } else {
        format!("I don't know about type {}!", type_name::<T>())
    }
}

fn type_switch(out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "{}", classify(&21))?;
    writeln!(out, "{}", classify(&"hello"))?;
    writeln!(out, "{}", classify(&true))
}

fn display(out: &mut dyn Write) -> io::Result<()> {
    let a = Person::new("Arthur Dent", 42);
    let z = Person::new("Zaphod Beeblebrox", 9001);
    writeln!(out, "{a} {z}")
}

fn display_newtypes(out: &mut dyn Write) -> io::Result<()> {
    let hosts = BTreeMap::from([
        ("loopback", Ipv4([127, 0, 0, 1])),
        ("googleDNS", Ipv4([8, 8, 8, 8])),
    ]);
    for (name, ip) in &hosts {
        writeln!(out, "{name}: {ip}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::practice::capture;

    #[test]
    fn test_receivers() {
        assert_eq!(capture(methods), "5\n");
        assert_eq!(capture(newtype_methods), "1.4142135623730951\n");
        assert_eq!(capture(receivers), "50\n5\n");
        assert_eq!(capture(argument_ownership), "5\n50\n");
    }

    #[test]
    fn test_auto_ref() {
        assert_eq!(capture(auto_ref), "{60 80} {96 72}\n");
    }

    #[test]
    fn test_choosing_receiver() {
        let output = capture(choosing_receiver);
        assert!(output.contains("Abs: 5\n"));
        assert!(output.contains("After scaling: Point { x: 15.0, y: 20.0 }, Abs: 25"));
    }

    #[test]
    fn test_trait_object_values() {
        let output = capture(trait_object_values);
        assert_eq!(
            output,
            "(Message { text: \"hello\" }, Message)\nhello\n(Angle(3.141592653589793), Angle)\n3.141592653589793\n"
        );
    }

    #[test]
    fn test_absent_receiver_is_handled() {
        let mut buf = Vec::new();
        None::<Message>.announce(&mut buf).unwrap();
        assert_eq!(buf, b"<none>\n");
        assert!(capture(absent_receivers).ends_with("Some(Message { text: \"hello\" })\nhello\n"));
        assert_eq!(capture(absent_trait_objects), "nothing to announce\n");
    }

    #[test]
    fn test_describe_any() {
        assert_eq!(describe_any(None), "(none)");
        assert_eq!(describe_any(Some(&42i32 as &dyn Any)), "(42, i32)");
        assert_eq!(describe_any(Some(&"hello" as &dyn Any)), "(hello, &str)");
        assert_eq!(describe_any(Some(&String::from("owned") as &dyn Any)), "(owned, String)");
        assert_eq!(describe_any(Some(&1.5f64 as &dyn Any)), "(?, unknown)");
    }

    #[test]
    fn test_checked_downcast() {
        assert_eq!(capture(checked_downcast), "Some(\"hello\") true\nNone false\n");
    }

    #[test]
    fn test_classify() {
        assert_eq!(classify(&21), "Twice 21 is 42");
        assert_eq!(classify(&"hello"), "\"hello\" is 5 bytes long");
        assert_eq!(classify(&true), "I don't know about type bool!");
    }

    #[test]
    fn test_display() {
        assert_eq!(
            capture(display),
            "Arthur Dent (42 years) Zaphod Beeblebrox (9001 years)\n"
        );
        assert_eq!(capture(display_newtypes), "googleDNS: 8.8.8.8\nloopback: 127.0.0.1\n");
    }
}
