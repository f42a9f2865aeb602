use std::iter::FusedIterator;

const SPACE: u8 = b' ';

/// スペース区切りの単語を両端から取り出すイテレータ
#[derive(Clone, Debug)]
pub struct Words<'a> {
    text: &'a str,
    front: usize,
    back: usize,
    remaining: usize,
}

impl<'a> Words<'a> {
    pub fn new(text: &'a str) -> Self {
        let remaining = text.split(' ').filter(|word| !word.is_empty()).count();
        Self {
            text,
            front: 0,
            back: text.len(),
            remaining,
        }
    }
}

impl<'a> Iterator for Words<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let bytes = self.text.as_bytes();
        while self.front < self.back && bytes[self.front] == SPACE {
            self.front += 1;
        }
        if self.front >= self.back {
            return None;
        }

        let start = self.front;
        while self.front < self.back && bytes[self.front] != SPACE {
            self.front += 1;
        }
        self.remaining -= 1;
        Some(&self.text[start..self.front])
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a> DoubleEndedIterator for Words<'a> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let bytes = self.text.as_bytes();
        while self.back > self.front && bytes[self.back - 1] == SPACE {
            self.back -= 1;
        }
        if self.back <= self.front {
            return None;
        }

        let end = self.back;
        while self.back > self.front && bytes[self.back - 1] != SPACE {
            self.back -= 1;
        }
        self.remaining -= 1;
        Some(&self.text[self.back..end])
    }
}

impl<'a> ExactSizeIterator for Words<'a> {}

impl<'a> FusedIterator for Words<'a> {}
