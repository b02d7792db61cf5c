use miette::{Result, miette};
use strum::{Display, EnumString};

use crate::source::scanner::{Scanner, is_name, is_word};

/// Aggregation applied to the target column of every group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display)]
#[strum(ascii_case_insensitive)]
pub enum Aggregate {
    #[strum(to_string = "sum")]
    Sum,

    /// Arithmetic mean rounded to two decimals.
    #[strum(to_string = "avg")]
    Average,
}

/// Group-by clause: rows are grouped by `fields` and `aggregate` is computed
/// over `target` within each group.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupSpec {
    pub fields: Vec<String>,
    pub aggregate: Aggregate,
    pub target: String,
}

/// Parses `fields|F1;F2;... data|FUNC;TARGET`.
pub(crate) fn parse_group(definition: &str) -> Result<GroupSpec> {
    let mut scanner = Scanner::new(definition.trim());

    if !scanner.eat_str("fields|") {
        return Err(miette!("Group must start with \"fields|\": {definition}"));
    }

    let data_at = scanner
        .rest
        .rfind("data|")
        .ok_or_else(|| miette!("Group has no \"data|\" part: {definition}"))?;
    let (groups, rest) = scanner.rest.split_at(data_at);

    if !groups
        .chars()
        .all(|ch| is_word(ch) || ch == ';' || ch.is_whitespace())
    {
        return Err(miette!("Not valid grouping fields: \"{}\"", groups.trim()));
    }
    let fields = groups
        .split(';')
        .map(str::trim)
        .filter(|field| !field.is_empty())
        .map(str::to_uppercase)
        .collect::<Vec<_>>();
    if fields.is_empty() {
        return Err(miette!("No fields to group by: {definition}"));
    }

    let mut scanner = Scanner::new(rest);
    scanner.eat_str("data|");

    let func = scanner.take_while(is_word);
    let aggregate = func
        .parse::<Aggregate>()
        .map_err(|_| miette!("Unknown aggregation function: {func}"))?;

    scanner.skip_whitespace();
    if !scanner.eat(';') {
        return Err(miette!("Expected \";\" after \"{func}\" in group: {definition}"));
    }

    let target = scanner.take_while(is_name).trim();
    if target.is_empty() || !scanner.is_empty() {
        return Err(miette!("Not valid aggregation column in group: {definition}"));
    }

    Ok(GroupSpec {
        fields,
        aggregate,
        target: target.to_uppercase(),
    })
}
