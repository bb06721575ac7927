use std::{
	io,
	fs::{self, File},
	path::{Path, PathBuf},
};

use crate::keyword::{KeywordDb, KeywordIndex};


/// Run the test for every file in the given directory, recursively. The path is relative
/// to the crate root.
pub fn test_dir<P, F>(path: P, mut test: F) -> io::Result<()>
where
	P: AsRef<Path>,
	F: FnMut(&Path, File) -> io::Result<()>,
{
	fn run<F>(dir: &Path, test: &mut F) -> io::Result<()>
	where
		F: FnMut(&Path, File) -> io::Result<()>,
	{
		for entry in fs::read_dir(dir)? {
			let path = entry?.path();

			if path.is_dir() {
				run(&path, test)?;
			} else {
				let file = File::open(&path)?;
				test(&path, file)?;
			}
		}

		Ok(())
	}

	run(&crate_path(path), &mut test)
}


pub fn crate_path<P: AsRef<Path>>(path: P) -> PathBuf {
	let mut full = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
	full.push(path);
	full
}


/// The keyword database used by the test programs.
pub fn keyword_db() -> io::Result<KeywordDb> {
	let mut db = KeywordDb::new();

	db
		.load_json_file(crate_path("testdata/keywords.json"))
		.map_err(|error| io::Error::new(io::ErrorKind::Other, error))?;

	Ok(db)
}


pub fn keyword_index() -> io::Result<KeywordIndex> {
	keyword_db().map(|db| KeywordIndex::from_db(&db))
}
