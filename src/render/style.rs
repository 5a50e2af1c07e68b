//! Node line transforms for use as renderer post-processors

/// Fill the object with a PlantUML color, e.g. `fill_color("Yellow")`
/// turns `object "A B" as A_B` into `object #Yellow "A B" as A_B`.
pub fn fill_color(color: &str) -> impl Fn(&str) -> String + '_ {
    move |line: &str| line.replacen("object", &format!("object #{color}"), 1)
}

/// Append a stereotype, e.g. `<<deceased>>`, before the line break
pub fn stereotype(name: &str) -> impl Fn(&str) -> String + '_ {
    move |line: &str| {
        let body = line.trim_end_matches('\n');
        let newline = &line[body.len()..];
        format!("{body} <<{name}>>{newline}")
    }
}

/// Apply `first` and then `second`
pub fn chain<A, B>(first: A, second: B) -> impl Fn(&str) -> String
where
    A: Fn(&str) -> String,
    B: Fn(&str) -> String,
{
    move |line: &str| second(&first(line))
}
