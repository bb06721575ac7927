use std::{
	collections::{BTreeSet, HashMap},
	fmt::{self, Display},
	fs::File,
	io::{self, BufReader, Read},
	path::Path,
};

use serde::Deserialize;

use super::{canonical_name, Keyword, Overload};


/// Error loading a keyword file.
#[derive(Debug)]
pub enum LoadError {
	Io(io::Error),
	Json(serde_json::Error),
	InvalidTypeCode { keyword: Box<str>, code: char },
}


impl Display for LoadError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Io(error) => write!(f, "{}", error),
			Self::Json(error) => write!(f, "malformed keyword file: {}", error),
			Self::InvalidTypeCode { keyword, code } => {
				write!(f, "invalid type code '{}' in keyword '{}'", code, keyword)
			}
		}
	}
}


impl std::error::Error for LoadError {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		match self {
			Self::Io(error) => Some(error),
			Self::Json(error) => Some(error),
			Self::InvalidTypeCode { .. } => None,
		}
	}
}


impl From<io::Error> for LoadError {
	fn from(error: io::Error) -> Self {
		Self::Io(error)
	}
}


impl From<serde_json::Error> for LoadError {
	fn from(error: serde_json::Error) -> Self {
		Self::Json(error)
	}
}


#[derive(Debug, Deserialize)]
struct RawKeyword {
	name: String,
	#[serde(default)]
	plugin: String,
	#[serde(default)]
	overloads: Vec<RawOverload>,
}


#[derive(Debug, Deserialize)]
struct RawOverload {
	#[serde(default)]
	args: String,
	#[serde(default)]
	returns: String,
}


impl RawKeyword {
	fn into_keyword(self) -> Result<Keyword, LoadError> {
		let name = self.name;
		let overloads = self.overloads
			.into_iter()
			.map(
				|overload| Overload::parse(&overload.args, &overload.returns)
					.map_err(
						|code| LoadError::InvalidTypeCode { keyword: name.as_str().into(), code }
					)
			)
			.collect::<Result<Vec<_>, _>>()?;

		Ok(Keyword::new(&name, self.plugin, overloads))
	}
}


/// The set of all known keywords, keyed by canonical name.
#[derive(Debug, Default)]
pub struct KeywordDb {
	keywords: HashMap<Box<str>, Keyword>,
	plugins: BTreeSet<Box<str>>,
}


impl KeywordDb {
	pub fn new() -> Self {
		Self::default()
	}


	/// Add a keyword. If a keyword with the same name exists, the overloads are merged
	/// into it and false is returned.
	pub fn add(&mut self, keyword: Keyword) -> bool {
		if !keyword.plugin.is_empty() {
			self.plugins.insert(keyword.plugin.clone());
		}

		match self.keywords.get_mut(&keyword.name) {
			Some(existing) => {
				for overload in keyword.overloads {
					if !existing.overloads.contains(&overload) {
						existing.overloads.push(overload);
					}
				}
				false
			}

			None => {
				self.keywords.insert(keyword.name.clone(), keyword);
				true
			}
		}
	}


	/// Lookup a keyword by name. Case and inner spacing are irrelevant.
	pub fn lookup(&self, name: &str) -> Option<&Keyword> {
		self.keywords.get(&canonical_name(name))
	}


	/// Load keywords from a JSON array of
	/// `{ "name": ..., "plugin": ..., "overloads": [{ "args": ..., "returns": ... }] }`.
	/// Returns how many new keywords were added.
	pub fn load_json<R: Read>(&mut self, reader: R) -> Result<usize, LoadError> {
		let raw: Vec<RawKeyword> = serde_json::from_reader(reader)?;

		let mut added = 0;
		for keyword in raw {
			if self.add(keyword.into_keyword()?) {
				added += 1;
			}
		}

		Ok(added)
	}


	pub fn load_json_file<P: AsRef<Path>>(&mut self, path: P) -> Result<usize, LoadError> {
		let path = path.as_ref();
		let file = File::open(path)?;
		let added = self.load_json(BufReader::new(file))?;

		log::debug!("loaded {} keywords from {}", added, path.display());

		Ok(added)
	}


	pub fn names(&self) -> impl Iterator<Item = &str> {
		self.keywords.keys().map(AsRef::as_ref)
	}


	pub fn keywords(&self) -> impl Iterator<Item = &Keyword> {
		self.keywords.values()
	}


	/// The plugins that supplied at least one keyword, sorted by name.
	pub fn plugins(&self) -> impl Iterator<Item = &str> {
		self.plugins.iter().map(AsRef::as_ref)
	}


	pub fn len(&self) -> usize {
		self.keywords.len()
	}


	pub fn is_empty(&self) -> bool {
		self.keywords.is_empty()
	}
}
