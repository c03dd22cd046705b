use crate::{
    error::SelfCheckFailed,
    id_gen::IdGenerator,
    record::{AuxRecord, CompositeRecord},
};
use regex::Regex;

/// Matches `ID: <id>` with a decimal id without leading zeros.
const RENDER_PATTERN: &str = r"^ID: (0|[1-9][0-9]*)$";

/// Extracts the id from text produced by [`AuxRecord::render`].
/// Returns [`None`] if the text is not in the rendered form.
pub fn parse_rendered(rendered: &str) -> Option<usize> {
    let re = Regex::new(RENDER_PATTERN).expect("invalid render pattern");
    re.captures(rendered)?.get(1)?.as_str().parse().ok()
}

/// Checks that `second` was created right after `first`.
pub fn check_increment(
    first: &CompositeRecord,
    second: &CompositeRecord,
) -> Result<(), SelfCheckFailed> {
    let expected = first
        .sub()
        .id()
        .checked_add(1)
        .ok_or_else(|| SelfCheckFailed::not_consecutive(first.sub().id(), second.sub().id()))?;

    if second.sub().id() != expected {
        return Err(SelfCheckFailed::not_consecutive(
            first.sub().id(),
            second.sub().id(),
        ));
    }

    check_rendered(second.aux(), expected)
}

fn check_rendered(aux: AuxRecord<'_>, expected: usize) -> Result<(), SelfCheckFailed> {
    let rendered = aux.render();
    match parse_rendered(&rendered) {
        Some(id) if id == expected => Ok(()),
        _ => Err(SelfCheckFailed::malformed_render(&rendered, expected)),
    }
}

/// Checks that every record was created right after the previous one.
pub fn check_sequence(records: &[CompositeRecord]) -> Result<(), SelfCheckFailed> {
    records
        .windows(2)
        .try_for_each(|pair| check_increment(&pair[0], &pair[1]))
}

/// Creates two records from `id_gen` and checks their ids are consecutive.
pub fn run_self_check(id_gen: &mut IdGenerator) -> Result<(), SelfCheckFailed> {
    let first = CompositeRecord::new(id_gen);
    let second = CompositeRecord::new(id_gen);
    check_increment(&first, &second)
}
