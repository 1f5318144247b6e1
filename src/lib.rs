pub mod expenses;

pub mod io {
    use either::Either;
    use std::fmt;
    use std::fs::File;
    use std::io::{BufRead, BufReader};
    use std::num::ParseIntError;
    use std::path::{Path, PathBuf};
    use std::str::FromStr;

    /// Whitespace separated values of a `BufRead`, any number of them per line.
    pub struct Tokens<I, T> {
        input: I,
        buffer: String,
        // start of the unconsumed part of buffer
        offset: usize,
        line: usize,
        _type_of_t: std::marker::PhantomData<T>,
    }

    impl<I: BufRead, T: FromStr> Tokens<I, T> {
        pub fn new(input: I) -> Self {
            Self {
                input,
                buffer: String::new(),
                offset: 0,
                line: 0,
                _type_of_t: Default::default(),
            }
        }
    }

    impl<I, T> Iterator for Tokens<I, T>
    where
        I: BufRead,
        T: FromStr + 'static,
        T::Err: 'static,
    {
        type Item = Result<T, Either<BadToken<T::Err>, std::io::Error>>;

        fn next(&mut self) -> Option<Self::Item> {
            loop {
                let rest = &self.buffer[self.offset..];
                let trimmed = rest.trim_start();

                if !trimmed.is_empty() {
                    let start = self.offset + (rest.len() - trimmed.len());
                    let end = start + trimmed.find(char::is_whitespace).unwrap_or(trimmed.len());
                    self.offset = end;

                    let line = self.line;
                    let token = &self.buffer[start..end];
                    return Some(T::from_str(token).map_err(|error| {
                        Either::Left(BadToken {
                            token: token.to_owned(),
                            line,
                            error,
                        })
                    }));
                }

                self.buffer.clear();
                self.offset = 0;

                match self.input.read_line(&mut self.buffer) {
                    Ok(0) => return None,
                    Ok(_) => self.line += 1,
                    Err(e) => return Some(Err(Either::Right(e))),
                }
            }
        }
    }

    /// A token which failed to parse, `line` is 1-based.
    #[derive(Debug, PartialEq)]
    pub struct BadToken<E> {
        pub token: String,
        pub line: usize,
        pub error: E,
    }

    impl<E: fmt::Display> fmt::Display for BadToken<E> {
        fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(
                fmt,
                "invalid integer {:?} on line {}: {}",
                self.token, self.line, self.error
            )
        }
    }

    #[derive(Debug)]
    pub enum ReadError {
        Open {
            path: PathBuf,
            error: std::io::Error,
        },
        Read(std::io::Error),
        Parse(BadToken<ParseIntError>),
    }

    impl fmt::Display for ReadError {
        fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
            match self {
                ReadError::Open { path, error } => write!(fmt, "open {}: {}", path.display(), error),
                ReadError::Read(error) => write!(fmt, "read: {}", error),
                ReadError::Parse(bad) => write!(fmt, "{}", bad),
            }
        }
    }

    impl std::error::Error for ReadError {
        fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
            match self {
                ReadError::Open { error, .. } | ReadError::Read(error) => Some(error),
                ReadError::Parse(bad) => Some(&bad.error),
            }
        }
    }

    impl From<Either<BadToken<ParseIntError>, std::io::Error>> for ReadError {
        fn from(e: Either<BadToken<ParseIntError>, std::io::Error>) -> Self {
            match e {
                Either::Left(bad) => ReadError::Parse(bad),
                Either::Right(error) => ReadError::Read(error),
            }
        }
    }

    /// Reads all of the integers or fails on the first bad token; nothing partial is returned.
    pub fn parse_dataset<R: BufRead>(input: R) -> Result<Vec<i64>, ReadError> {
        Tokens::new(input)
            .collect::<Result<Vec<i64>, _>>()
            .map_err(ReadError::from)
    }

    pub fn read_dataset<P: AsRef<Path>>(path: P) -> Result<Vec<i64>, ReadError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|error| ReadError::Open {
            path: path.to_owned(),
            error,
        })?;

        let values = parse_dataset(BufReader::new(file))?;
        log::debug!("read {} values from {}", values.len(), path.display());
        Ok(values)
    }

}
