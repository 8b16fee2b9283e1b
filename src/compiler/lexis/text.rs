pub struct Reader {
    code: Vec<char>,
    position: usize,
}

impl Reader {
    #[must_use]
    pub fn new(code: &str) -> Reader {
        let code: Vec<_> = code.chars().collect();
        Reader { code, position: 0 }
    }

    #[must_use]
    pub fn peek(&self) -> Option<char> {
        self.code.get(self.position).copied()
    }

    pub fn forward(&mut self) {
        self.position += 1;
    }

    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }
}
