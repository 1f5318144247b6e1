use report_repair::expenses::{find_pair, find_triplet, TARGET};
use report_repair::io::read_dataset;
use std::io::Write;
use std::path::Path;

const INPUT: &str = "data1.txt";

fn main() {
    env_logger::init();

    let stdout = std::io::stdout();
    let mut stdout = stdout.lock();

    if let Err(e) = run(Path::new(INPUT), &mut stdout) {
        log::error!("failed: {:?}", e);
        std::process::exit(1);
    }
}

/// Writes the answer or the not-found line for both parts; on a read error only the error line is
/// written and it is returned as well.
fn run<W: Write>(path: &Path, out: &mut W) -> Result<(), Box<dyn std::error::Error + 'static>> {
    let data = match read_dataset(path) {
        Ok(data) => data,
        Err(e) => {
            writeln!(out, "{}", e)?;
            return Err(e.into());
        }
    };

    match find_pair(&data) {
        Some(pair) => {
            log::debug!("pair at {:?}: {:?}", pair.indices, pair.values);
            writeln!(out, "Answer1: {}", pair.product())?;
        }
        None => writeln!(out, "Could not find 2 numbers that sum up to {}", TARGET)?,
    }

    match find_triplet(&data) {
        Some(triplet) => {
            log::debug!("triplet at {:?}: {:?}", triplet.indices, triplet.values);
            writeln!(out, "Answer2: {}", triplet.product())?;
        }
        None => writeln!(out, "Could not find 3 numbers that sum up to {}", TARGET)?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::run;
    use report_repair::io::ReadError;
    use std::path::{Path, PathBuf};

    fn input_file(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "report-repair-day01-{}-{}.txt",
            std::process::id(),
            name
        ));
        std::fs::write(&path, contents).unwrap();
        path
    }

    fn output_of(path: &Path) -> (String, bool) {
        let mut out = Vec::new();
        let ok = run(path, &mut out).is_ok();
        (String::from_utf8(out).unwrap(), ok)
    }

    #[test]
    fn example_answers() {
        let path = input_file("example", "1721\n979\n366\n299\n675\n1456\n");
        let (output, ok) = output_of(&path);
        std::fs::remove_file(&path).unwrap();

        assert!(ok);
        assert_eq!(output, "Answer1: 514579\nAnswer2: 241861950\n");
    }

    #[test]
    fn empty_input_finds_nothing() {
        let path = input_file("empty", "");
        let (output, ok) = output_of(&path);
        std::fs::remove_file(&path).unwrap();

        assert!(ok);
        assert_eq!(
            output,
            "Could not find 2 numbers that sum up to 2020\n\
             Could not find 3 numbers that sum up to 2020\n"
        );
    }

    #[test]
    fn only_pair_found() {
        let path = input_file("pair", "1010 5 1010");
        let (output, ok) = output_of(&path);
        std::fs::remove_file(&path).unwrap();

        assert!(ok);
        assert_eq!(
            output,
            "Answer1: 1020100\nCould not find 3 numbers that sum up to 2020\n"
        );
    }

    #[test]
    fn missing_file_skips_both_parts() {
        let path = std::env::temp_dir().join(format!(
            "report-repair-day01-{}-missing.txt",
            std::process::id()
        ));

        let mut out = Vec::new();
        let e = run(&path, &mut out).unwrap_err();
        let output = String::from_utf8(out).unwrap();

        match e.downcast_ref::<ReadError>() {
            Some(ReadError::Open { .. }) => {}
            other => panic!("unexpected {:?}", other),
        }
        assert_eq!(output, format!("{}\n", e));
        assert!(output.starts_with(&format!("open {}: ", path.display())));
        assert!(!output.contains("Answer"));
        assert!(!output.contains("Could not find"));
    }

    #[test]
    fn bad_token_skips_both_parts() {
        let path = input_file("bad", "1721\n97x\n");
        let (output, ok) = output_of(&path);
        std::fs::remove_file(&path).unwrap();

        assert!(!ok);
        assert_eq!(
            output,
            "invalid integer \"97x\" on line 2: invalid digit found in string\n"
        );
    }
}
