use either::Either;
use std::io::BufRead;
use std::str::FromStr;

// Either::Left is a parse failure, Either::Right a read error. Invalid utf-8 still consumes the
// line, so reading can go on after it.
pub struct OnePerLine<I, T> {
    input: I,
    buffer: String,
    line_number: usize,
    _type_of_t: std::marker::PhantomData<T>,
}

impl<I: BufRead, T: FromStr> OnePerLine<I, T> {
    pub fn new(input: I) -> Self {
        Self {
            input,
            buffer: String::new(),
            line_number: 0,
            _type_of_t: Default::default(),
        }
    }

    pub fn line_number(&self) -> usize {
        self.line_number
    }
}

impl<I, T> Iterator for OnePerLine<I, T>
where
    I: BufRead,
    T: FromStr + 'static,
    T::Err: 'static,
{
    type Item = Result<T, Either<T::Err, std::io::Error>>;

    fn next(&mut self) -> Option<Self::Item> {
        self.buffer.clear();
        let read = self.input.read_line(&mut self.buffer);
        match read {
            Ok(0) => None,
            Ok(_) => {
                self.line_number += 1;
                Some(T::from_str(self.buffer.trim()).map_err(Either::Left))
            }
            Err(e) => {
                if e.kind() == std::io::ErrorKind::InvalidData {
                    self.line_number += 1;
                }
                Some(Err(Either::Right(e)))
            }
        }
    }
}

#[test]
fn counts_lines_and_keeps_going_after_bad_ones() {
    use std::io::Cursor;

    let mut iter = OnePerLine::<_, u32>::new(Cursor::new(b"1\n  two \n3"));

    assert_eq!(iter.next().unwrap().unwrap(), 1);
    assert_eq!(iter.line_number(), 1);
    assert!(matches!(iter.next(), Some(Err(Either::Left(_)))));
    assert_eq!(iter.next().unwrap().unwrap(), 3);
    assert_eq!(iter.line_number(), 3);
    assert!(iter.next().is_none());
}
