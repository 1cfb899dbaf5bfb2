//! Classification of individual trace lines.

/// Structural meaning of one trace line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directive<'a> {
    /// `Considering target file 'x'.` opens a prerequisite block.
    Considering(&'a str),
    /// `Must remake target 'x'.` marks a target dirty.
    MustRemake(&'a str),
    /// `Pruning file 'x'.` records an already satisfied prerequisite.
    Pruning(&'a str),
    /// `Finished prerequisites of target file 'x'.` closes a block.
    Finished(&'a str),
    /// `File 'x' was considered already.` closes a block opened for a
    /// target whose prerequisites were scanned earlier.
    ConsideredAlready(&'a str),
    /// `Reading makefile 'x'...` names the makefile being loaded.
    ReadingMakefile(&'a str),
    /// Anything else.
    Other,
}

const CONSIDERING: &str = "Considering target file";
const MUST_REMAKE: &str = "Must remake target ";
const PRUNING: &str = "Pruning file ";
const FINISHED: &str = "Finished prerequisites of target file ";
const READING_MAKEFILE: &str = "Reading makefile ";
const CONSIDERED_ALREADY: &str = "was considered already";

/// Failure to find a delimited target name in a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MissingName;

impl<'a> Directive<'a> {
    /// Classify `text`, a line with leading whitespace already removed.
    ///
    /// # Errors
    ///
    /// Returns [`MissingName`] when a recognised line carries no
    /// well-formed quoted target name.
    ///
    /// # Examples
    ///
    /// ```
    /// use make2graph::trace::Directive;
    ///
    /// let d = Directive::parse("Considering target file `main.o'.").unwrap();
    /// assert_eq!(d, Directive::Considering("main.o"));
    /// let d = Directive::parse("File 'main.o' was considered already.").unwrap();
    /// assert_eq!(d, Directive::ConsideredAlready("main.o"));
    /// ```
    pub fn parse(text: &'a str) -> Result<Self, MissingName> {
        let directive = if text.starts_with(CONSIDERING) {
            Self::Considering(target_name(text)?)
        } else if text.starts_with(MUST_REMAKE) {
            Self::MustRemake(target_name(text)?)
        } else if text.starts_with(PRUNING) {
            Self::Pruning(target_name(text)?)
        } else if text.starts_with(FINISHED) {
            Self::Finished(target_name(text)?)
        } else if text.starts_with(READING_MAKEFILE) {
            Self::ReadingMakefile(target_name(text)?)
        } else if is_considered_already(text) {
            Self::ConsideredAlready(target_name(text)?)
        } else {
            Self::Other
        };
        Ok(directive)
    }

    /// Name closed by `text` when it is a block-closing line.
    ///
    /// Only `Finished prerequisites` and `was considered already` lines are
    /// examined; any other text yields `None` without being checked for a
    /// target name.
    ///
    /// # Errors
    ///
    /// Returns [`MissingName`] when a closing line carries no well-formed
    /// quoted target name.
    ///
    /// # Examples
    ///
    /// ```
    /// use make2graph::trace::Directive;
    ///
    /// assert_eq!(Directive::closing("File 'a.o' was considered already."), Ok(Some("a.o")));
    /// assert_eq!(Directive::closing("Considering target file a.o."), Ok(None));
    /// ```
    pub fn closing(text: &'a str) -> Result<Option<&'a str>, MissingName> {
        if text.starts_with(FINISHED) || is_considered_already(text) {
            target_name(text).map(Some)
        } else {
            Ok(None)
        }
    }
}

fn is_considered_already(text: &str) -> bool {
    text.trim_end_matches('.').ends_with(CONSIDERED_ALREADY)
}

/// Extract the target name quoted in `line`.
///
/// Older `make` releases quote as `` `name' ``; 4.0 and later use
/// `'name'`. The name runs from the first backtick, or failing that the first
/// single quote, up to the next single quote.
///
/// # Errors
///
/// Returns [`MissingName`] when no opening delimiter or no closing quote is
/// present.
///
/// # Examples
///
/// ```
/// use make2graph::trace::target_name;
///
/// assert_eq!(target_name("Pruning file `a.c'."), Ok("a.c"));
/// assert_eq!(target_name("Pruning file 'a.c'."), Ok("a.c"));
/// assert!(target_name("Pruning file a.c.").is_err());
/// ```
pub fn target_name(line: &str) -> Result<&str, MissingName> {
    let (_, rest) = line
        .split_once('`')
        .or_else(|| line.split_once('\''))
        .ok_or(MissingName)?;
    let (name, _) = rest.split_once('\'').ok_or(MissingName)?;
    Ok(name)
}
