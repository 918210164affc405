//! Documentation content for fieldpath CLI

/// Get the path syntax reference
pub fn get_docs_overview() -> &'static str {
    r#"FIELDPATH SYNTAX

A field path locates a value inside a JSON or XML-like payload. It is a list of
steps separated by dots. A step is either a field name or an array marker.

ARRAY MARKERS

  []                Any element of the array (unspecified)
  [N]               The element at index N (digits only)
  [*]               Every element of the array

An array marker is always a step of its own. A dot next to it is optional:
a[0]b, a.[0].b and a[0].b all have the steps a, [0], b.

PRECISION

  A path with no array marker is precise: it names exactly one location.
  A path with at least one array marker is imprecise: it may name many.

QUICK REFERENCE

  a.b.c             a, b, c                 precise
  a.b[].c           a, b, [], c             imprecise
  items[3].name     items, [3], name        imprecise
  x.y[*].z          x, y, [*], z            imprecise

NOTES

  Brackets that do not form a marker are part of the field name: a[x] is a
  single step named "a[x]". Repeated or trailing dots do not create empty
  steps. There is no escaping for dots or brackets inside a name.
"#
}
