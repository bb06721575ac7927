use super::KeywordDb;


/// The result of matching an input against the keyword index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match {
	/// How many leading characters of the input agree with some keyword.
	/// When `exact` is set, this is the length of the matched keyword.
	pub length: usize,
	/// Whether a whole keyword matched, ending at a word boundary of the input.
	pub exact: bool,
}


/// An immutable, sorted view of all keyword names, supporting longest prefix matching.
/// The index is rebuilt whenever the keyword set changes, never updated in place.
#[derive(Debug, Default, Clone)]
pub struct KeywordIndex {
	/// Lower case names in byte order.
	keywords: Vec<Box<str>>,
	longest_length: usize,
	longest_word_count: usize,
}


impl KeywordIndex {
	pub fn new() -> Self {
		Self::default()
	}


	pub fn from_db(db: &KeywordDb) -> Self {
		let mut index = Self::new();
		index.update_from_db(db);
		index
	}


	/// Rebuild the index from the given keyword database.
	pub fn update_from_db(&mut self, db: &KeywordDb) {
		self.update_from_names(db.names())
	}


	/// Rebuild the index from a list of keyword names.
	pub fn update_from_names<I, S>(&mut self, names: I)
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		self.keywords = names
			.into_iter()
			.map(|name| name.as_ref().to_lowercase().into_boxed_str())
			.collect();

		self.keywords.sort_unstable();
		self.keywords.dedup();

		self.longest_length = 0;
		self.longest_word_count = 0;

		for keyword in &self.keywords {
			let length = keyword.chars().count();
			let words = keyword.matches(' ').count() + 1;

			self.longest_length = self.longest_length.max(length);
			self.longest_word_count = self.longest_word_count.max(words);
		}

		log::debug!(
			"keyword index rebuilt: {} keywords, longest {} chars, up to {} words",
			self.keywords.len(),
			self.longest_length,
			self.longest_word_count,
		);
	}


	/// Find the longest keyword that is a prefix of the input and ends at a word boundary
	/// of the input. The comparison is case insensitive.
	///
	/// If there is no such keyword, the match is not exact and its length is the longest
	/// common prefix between the input and any keyword.
	pub fn find_longest_match(&self, input: &str) -> Match {
		let input = input.as_bytes();

		let mut range = 0 .. self.keywords.len();
		let mut matched = 0;
		let mut exact = None;

		while matched < input.len() && !range.is_empty() {
			let c = Some(input[matched].to_ascii_lowercase());
			let candidates = &self.keywords[range.clone()];

			// All candidates share the first `matched` bytes, so the byte at `matched` is
			// sorted within the range. Shorter keywords yield None, which sorts first.
			let start = candidates.partition_point(|keyword| byte_at(keyword, matched) < c);
			let end = candidates.partition_point(|keyword| byte_at(keyword, matched) <= c);

			if start == end {
				break;
			}

			range = range.start + start .. range.start + end;
			matched += 1;

			// A keyword equal to the consumed input is the shortest in range.
			if is_boundary(input, matched) && self.keywords[range.start].len() == matched {
				exact = Some(matched);
			}
		}

		match exact {
			Some(length) => Match { length, exact: true },
			None => Match { length: matched, exact: false },
		}
	}


	/// Check whether some keyword starts with the given input, case insensitive.
	/// Every keyword is a prefix of itself.
	pub fn has_prefix(&self, input: &str) -> bool {
		let input = input.to_lowercase();
		let ix = self.keywords.partition_point(|keyword| **keyword < *input);

		self.keywords
			.get(ix)
			.map(|keyword| keyword.starts_with(input.as_str()))
			.unwrap_or(false)
	}


	/// Check whether the exact (case insensitive) name is in the index.
	pub fn contains(&self, name: &str) -> bool {
		let name = name.to_lowercase();
		self.keywords
			.binary_search_by(|keyword| (**keyword).cmp(name.as_str()))
			.is_ok()
	}


	/// Length in characters of the longest keyword.
	pub fn longest_keyword_length(&self) -> usize {
		self.longest_length
	}


	/// Maximum number of space separated words in any keyword.
	pub fn longest_keyword_word_count(&self) -> usize {
		self.longest_word_count
	}


	pub fn len(&self) -> usize {
		self.keywords.len()
	}


	pub fn is_empty(&self) -> bool {
		self.keywords.is_empty()
	}


	pub fn iter(&self) -> impl Iterator<Item = &str> {
		self.keywords.iter().map(AsRef::as_ref)
	}
}


fn byte_at(keyword: &str, ix: usize) -> Option<u8> {
	keyword.as_bytes().get(ix).copied()
}


/// Keywords may only end where the input word ends.
fn is_boundary(input: &[u8], ix: usize) -> bool {
	match input.get(ix) {
		Some(c) => !(c.is_ascii_alphanumeric() || *c == b'_'),
		None => true,
	}
}
