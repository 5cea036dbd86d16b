#[cfg(test)]
#[path = "../../tests/unit/event/reader_test.rs"]
mod reader_test;

use crate::common::{FormatError, NumberError, parse_number};
use planner_core::models::{Activity, Event};
use std::io::{BufRead, BufReader, Read};

/// A trait to read an event from the text format.
pub trait EventProblem {
    /// Reads an event.
    fn read_event(self) -> Result<Event, FormatError>;
}

impl<R: Read> EventProblem for BufReader<R> {
    fn read_event(self) -> Result<Event, FormatError> {
        read_event_format(self)
    }
}

impl EventProblem for String {
    fn read_event(self) -> Result<Event, FormatError> {
        read_event_format(BufReader::new(self.as_bytes()))
    }
}

fn read_event_format<R: Read>(reader: BufReader<R>) -> Result<Event, FormatError> {
    EventReader { buffer: String::new(), reader, line: 0 }.read_event()
}

struct EventReader<R: Read> {
    buffer: String,
    reader: BufReader<R>,
    line: usize,
}

impl<R: Read> EventReader<R> {
    fn read_event(&mut self) -> Result<Event, FormatError> {
        let size = self.read_size()?;
        let (max_time, max_budget) = self.read_constraints()?;
        let activities = (0..size).map(|idx| self.read_activity(idx, size)).collect::<Result<Vec<_>, _>>()?;

        Ok(Event::new(max_time, max_budget, activities))
    }

    fn read_size(&mut self) -> Result<usize, FormatError> {
        if !self.read_line()? {
            return Err(self.create_error("E0001", "missing activity count", "add activity count as the first line"));
        }

        parse_number(self.buffer.trim()).map_err(|err| {
            let cause = match err {
                NumberError::Malformed => "invalid activity count",
                NumberError::Negative => "negative activity count",
            };
            self.create_error("E0001", cause, "specify activity count as a non-negative integer")
        })
    }

    fn read_constraints(&mut self) -> Result<(usize, usize), FormatError> {
        let action = "specify max time and max budget as two non-negative integers";

        if !self.read_line()? {
            return Err(self.create_error("E0002", "missing constraints", action));
        }

        let values = match self.buffer.split_whitespace().collect::<Vec<_>>().as_slice() {
            [max_time, max_budget] => (parse_number(max_time), parse_number(max_budget)),
            _ => return Err(self.create_error("E0002", "invalid constraints", action)),
        };

        match values {
            (Ok(max_time), Ok(max_budget)) => Ok((max_time, max_budget)),
            (Err(NumberError::Malformed), _) | (_, Err(NumberError::Malformed)) => {
                Err(self.create_error("E0002", "invalid constraints", action))
            }
            _ => Err(self.create_error("E0003", "negative constraint(s)", action)),
        }
    }

    fn read_activity(&mut self, idx: usize, size: usize) -> Result<Activity, FormatError> {
        if !self.read_line()? {
            return Err(FormatError::new_with_details(
                "E0005".to_string(),
                "missing activities".to_string(),
                "add missing activity lines or fix activity count".to_string(),
                format!("expected {size} activities, got {idx}"),
            ));
        }

        let action = "specify activity as '<name> <time> <cost> <enjoyment>' with non-negative integers";

        match self.buffer.split_whitespace().collect::<Vec<_>>().as_slice() {
            [name, time, cost, enjoyment] => match (parse_number(time), parse_number(cost), parse_number(enjoyment)) {
                (Ok(time), Ok(cost), Ok(enjoyment)) => Ok(Activity::new(name, time, cost, enjoyment)),
                _ => Err(self.create_error("E0004", "invalid activity values", action)),
            },
            _ => Err(self.create_error("E0004", "invalid activity fields", action)),
        }
    }

    /// Reads the next line into the buffer. Returns false when there is no more input.
    fn read_line(&mut self) -> Result<bool, FormatError> {
        self.buffer.clear();
        self.line += 1;

        self.reader.read_line(&mut self.buffer).map(|bytes| bytes > 0).map_err(|err| {
            FormatError::new_with_details(
                "E0000".to_string(),
                "cannot read input".to_string(),
                "check that input is readable utf-8 text".to_string(),
                err.to_string(),
            )
        })
    }

    fn create_error(&self, code: &str, cause: &str, action: &str) -> FormatError {
        FormatError::new_with_details(
            code.to_string(),
            cause.to_string(),
            action.to_string(),
            format!("line {}: '{}'", self.line, self.buffer.trim()),
        )
    }
}
