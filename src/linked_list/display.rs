use core::fmt::{self, Debug, Display, Formatter};

/// Writes `items` joined by `separator`, or `[]` when there are none.
pub(crate) fn write_joined<'a, T, I>(f: &mut Formatter<'_>, items: I, separator: &str) -> fmt::Result
where
    T: Display + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let mut items = items.into_iter();
    let Some(first) = items.next() else {
        return f.write_str("[]");
    };
    Display::fmt(first, f)?;
    for item in items {
        f.write_str(separator)?;
        Display::fmt(item, f)?;
    }
    Ok(())
}

/// Writes `Name([a, b, c])`.
pub(crate) fn write_named_list<'a, T, I>(f: &mut Formatter<'_>, name: &str, items: I) -> fmt::Result
where
    T: Debug + 'a,
    I: IntoIterator<Item = &'a T>,
{
    f.write_str(name)?;
    f.write_str("(")?;
    f.debug_list().entries(items).finish()?;
    f.write_str(")")
}
