use crate::codec::decode;
use crate::compat::{BTreeMap, Cow, String, ToString, Vec};
use crate::options::Options;
use crate::types::ArrayFormat;
use crate::value::{Scalar, Value};

/// Values collected under one name
enum Slot {
    Value(Value),
    /// `name[N]` entries keyed by their digit string; `None` marks a plain
    /// occurrence, which sorts after every indexed one
    Indexed(Vec<(Option<String>, Scalar)>),
}

/// Builds the ordered mapping one decoded pair at a time
pub struct Grouper<'o> {
    options: &'o Options,
    entries: Vec<(String, Slot)>,
    positions: BTreeMap<String, usize>,
}

impl<'o> Grouper<'o> {
    pub fn new(options: &'o Options) -> Self {
        Self {
            options,
            entries: Vec::new(),
            positions: BTreeMap::new(),
        }
    }

    /// Add one pair. `name` is already decoded; `raw_value` is still
    /// encoded and `None` when the pair had no `=`.
    pub fn push(&mut self, name: &str, raw_value: Option<&str>) {
        match self.options.array_format {
            ArrayFormat::None => {
                let value = self.decode_scalar(raw_value);
                self.append(name, value);
            }
            ArrayFormat::Bracket => {
                let value = self.decode_scalar(raw_value);
                match name.strip_suffix("[]") {
                    Some(base) => self.append_list(base, Vec::from([value])),
                    None => self.append(name, value),
                }
            }
            ArrayFormat::ColonListSeparator => {
                let value = self.decode_scalar(raw_value);
                match name.strip_suffix(":list") {
                    Some(base) => self.append_list(base, Vec::from([value])),
                    None => self.append(name, value),
                }
            }
            ArrayFormat::Index => {
                let value = self.decode_scalar(raw_value);
                match split_index(name) {
                    Some((base, index)) => self.insert_indexed(base, Some(index), value),
                    None => self.insert_indexed(name, None, value),
                }
            }
            ArrayFormat::Comma | ArrayFormat::Separator => match self.split_separated(raw_value) {
                Value::Single(value) => self.append(name, value),
                Value::List(values) => self.append_list(name, values),
            },
            ArrayFormat::BracketSeparator => match name.strip_suffix("[]") {
                Some(base) => {
                    let values = match raw_value {
                        None => Vec::new(),
                        Some(raw) => self
                            .decode_text(raw)
                            .split(self.options.separator())
                            .map(Scalar::from)
                            .collect(),
                    };
                    self.append_list(base, values);
                }
                None => {
                    let value = self.decode_scalar(raw_value);
                    self.append(name, value);
                }
            },
        }
    }

    /// Finish grouping, in first-occurrence order.
    pub fn finish(self) -> Vec<(String, Value)> {
        self.entries
            .into_iter()
            .map(|(name, slot)| match slot {
                Slot::Value(value) => (name, value),
                Slot::Indexed(items) => (name, indexed_value(items)),
            })
            .collect()
    }

    fn decode_text<'a>(&self, raw: &'a str) -> Cow<'a, str> {
        if self.options.decode {
            decode(raw)
        } else {
            Cow::Borrowed(raw)
        }
    }

    fn decode_scalar(&self, raw_value: Option<&str>) -> Scalar {
        raw_value.map_or(Scalar::Null, |raw| Scalar::from(self.decode_text(raw).into_owned()))
    }

    /// Comma and separator formats: split a raw value on the separator,
    /// or a decoded one when the separator only shows up after decoding.
    fn split_separated(&self, raw_value: Option<&str>) -> Value {
        let separator = self.options.separator();
        let Some(raw) = raw_value else {
            return Value::Single(Scalar::Null);
        };

        if raw.contains(separator) {
            return Value::List(
                raw.split(separator)
                    .map(|item| Scalar::from(self.decode_text(item).into_owned()))
                    .collect(),
            );
        }

        let decoded = self.decode_text(raw);
        if decoded.contains(separator) {
            return Value::List(
                decoded
                    .split(separator)
                    .map(|item| Scalar::from(self.decode_text(item).into_owned()))
                    .collect(),
            );
        }
        Value::Single(Scalar::from(decoded.into_owned()))
    }

    fn slot_mut(&mut self, name: &str) -> Option<&mut Slot> {
        let index = *self.positions.get(name)?;
        Some(&mut self.entries[index].1)
    }

    fn insert_slot(&mut self, name: &str, slot: Slot) {
        self.positions.insert(name.to_string(), self.entries.len());
        self.entries.push((name.to_string(), slot));
    }

    /// Repeated names accumulate into a list.
    fn append(&mut self, name: &str, value: Scalar) {
        match self.slot_mut(name) {
            Some(Slot::Value(existing)) => existing.push(value),
            Some(Slot::Indexed(items)) => items.push((None, value)),
            None => self.insert_slot(name, Slot::Value(Value::Single(value))),
        }
    }

    /// Array suffixed names always produce a list.
    fn append_list(&mut self, name: &str, values: Vec<Scalar>) {
        match self.slot_mut(name) {
            Some(Slot::Value(existing)) => existing.extend(values),
            Some(Slot::Indexed(items)) => items.extend(values.into_iter().map(|v| (None, v))),
            None => self.insert_slot(name, Slot::Value(Value::List(values))),
        }
    }

    /// A repeated index replaces the earlier value.
    fn insert_indexed(&mut self, name: &str, index: Option<&str>, value: Scalar) {
        match self.slot_mut(name) {
            Some(Slot::Indexed(items)) => {
                if let Some(index) = index {
                    if let Some(slot) = items
                        .iter_mut()
                        .find(|(i, _)| i.as_deref() == Some(index))
                    {
                        slot.1 = value;
                        return;
                    }
                }
                items.push((index.map(ToString::to_string), value));
            }
            Some(Slot::Value(existing)) => existing.push(value),
            None => self.insert_slot(
                name,
                Slot::Indexed(Vec::from([(index.map(ToString::to_string), value)])),
            ),
        }
    }
}

/// Split `name[12]` into `("name", "12")`. An empty index is allowed.
fn split_index(name: &str) -> Option<(&str, &str)> {
    let inner = name.strip_suffix(']')?;
    let open = inner.rfind('[')?;
    let digits = &inner[open + 1..];
    if digits.bytes().all(|b| b.is_ascii_digit()) {
        Some((&inner[..open], digits))
    } else {
        None
    }
}

/// Numeric order of two digit strings of any length
fn compare_index(a: &str, b: &str) -> core::cmp::Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

fn indexed_value(mut items: Vec<(Option<String>, Scalar)>) -> Value {
    if items.iter().all(|(index, _)| index.is_none()) {
        let mut values = items.into_iter().map(|(_, value)| value);
        return match (values.next(), values.len()) {
            (Some(first), 0) => Value::Single(first),
            (first, _) => Value::List(first.into_iter().chain(values).collect()),
        };
    }

    // stable: plain occurrences keep wire order after the indexed ones
    items.sort_by(|(a, _), (b, _)| match (a, b) {
        (Some(a), Some(b)) => compare_index(a, b),
        (Some(_), None) => core::cmp::Ordering::Less,
        (None, Some(_)) => core::cmp::Ordering::Greater,
        (None, None) => core::cmp::Ordering::Equal,
    });
    Value::List(items.into_iter().map(|(_, value)| value).collect())
}
