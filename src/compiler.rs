use crate::asm::Instr;
use crate::errors::{CompileError, CompileResult};

/// Placeholder token the machine template carries where the compiled
/// `main` function is spliced in.
pub const PROGRAM_PLACEHOLDER: &str = "{{ program }}";

struct OpenLoop {
    label_true: String,
    label_false: String,
    open_at: usize,
}

// All compilation state lives here: the emitted sequence, the stack of
// open loops and the counter that keeps label names unique across the
// whole program regardless of nesting.
struct Compiler {
    asm: Vec<Instr>,
    loop_stack: Vec<OpenLoop>,
    loop_counter: usize,
}

impl Compiler {
    fn new() -> Self {
        Compiler {
            asm: Vec::new(),
            loop_stack: Vec::new(),
            loop_counter: 0,
        }
    }

    /// Translate one source character. Anything outside the eight
    /// operators is a comment and emits nothing.
    fn step(&mut self, instr: char, position: usize) -> CompileResult<()> {
        match instr {
            '>' => self.asm.push(Instr::IncDp),
            '<' => self.asm.push(Instr::DecDp),
            '+' => self.asm.push(Instr::IncCell),
            '-' => self.asm.push(Instr::DecCell),
            ',' => {
                self.asm.push(Instr::InputQuery);
                self.asm.push(Instr::MstoreData);
                self.asm.push(Instr::AdvanceInPtr);
            }
            '.' => {
                self.asm.push(Instr::MloadData);
                self.asm.push(Instr::OutputQuery);
            }
            '[' => {
                let label_true = format!("loop_true_{}", self.loop_counter);
                let label_false = format!("loop_false_{}", self.loop_counter);
                self.loop_counter += 1;
                self.asm.push(Instr::Label(label_true.clone()));
                self.asm.push(Instr::MloadData);
                self.asm.push(Instr::BranchIfZero(label_false.clone()));
                self.loop_stack.push(OpenLoop {
                    label_true,
                    label_false,
                    open_at: position,
                });
            }
            ']' => {
                let open = self
                    .loop_stack
                    .pop()
                    .ok_or(CompileError::MismatchedLoop { position })?;
                self.asm.push(Instr::Jump(open.label_true));
                self.asm.push(Instr::Label(open.label_false));
            }
            _ => {}
        }
        Ok(())
    }

    fn finish(mut self) -> CompileResult<Vec<Instr>> {
        if let Some(open) = self.loop_stack.pop() {
            return Err(CompileError::UnterminatedLoop {
                position: open.open_at,
            });
        }
        self.asm.push(Instr::Return);
        Ok(self.asm)
    }
}

/// Compile a brainfuck program into the machine's instruction
/// sequence, terminated by `return;`. Single left-to-right pass.
pub fn compile(source: &str) -> CompileResult<Vec<Instr>> {
    let mut compiler = Compiler::new();
    for (position, instr) in source.chars().enumerate() {
        compiler.step(instr, position)?;
    }
    compiler.finish()
}

/// Render the instruction sequence as the machine's `main` function.
pub fn wrap_main(asm: &[Instr]) -> String {
    let body = asm
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n");
    format!("function main {{\n{}\n}}", body)
}

/// Splice the compiled function into the machine template. Plain
/// substring replacement; the template carries a single placeholder.
pub fn apply_template(template: &str, main_function: &str) -> String {
    template.replace(PROGRAM_PLACEHOLDER, main_function)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn lines(source: &str) -> Vec<String> {
        compile(source)
            .unwrap()
            .iter()
            .map(ToString::to_string)
            .collect()
    }

    #[test]
    fn single_cell_ops() {
        assert_eq!(lines("+"), vec!["inc_cell;", "return;"]);
        assert_eq!(lines("><"), vec!["inc_dp;", "dec_dp;", "return;"]);
        assert_eq!(lines("-"), vec!["dec_cell;", "return;"]);
    }

    #[test]
    fn empty_loop() {
        assert_eq!(
            lines("[]"),
            vec![
                "loop_true_0:",
                "data <== mload();",
                "branch_if_zero data, loop_false_0;",
                "jump loop_true_0;",
                "loop_false_0:",
                "return;",
            ]
        );
    }

    #[test]
    fn input_reads_store_and_advance() {
        assert_eq!(
            lines(","),
            vec![
                "data <=X= ${ std::prover::Query::Input(std::convert::int(std::prover::eval(in_ptr))) };",
                "mstore data;",
                "in_ptr <=X= in_ptr + 1;",
                "return;",
            ]
        );
    }

    #[test]
    fn output_loads_then_queries() {
        assert_eq!(
            lines("."),
            vec![
                "data <== mload();",
                "data <=X= ${ std::prover::Query::Output(1, std::convert::int(std::prover::eval(data))) };",
                "return;",
            ]
        );
    }

    #[test]
    fn comments_emit_nothing() {
        assert_eq!(lines("+ add one\n- and back"), lines("+-"));
        assert_eq!(lines(""), vec!["return;"]);
    }

    #[test]
    fn nested_loops_get_fresh_labels() {
        assert_eq!(
            lines("[[]]"),
            vec![
                "loop_true_0:",
                "data <== mload();",
                "branch_if_zero data, loop_false_0;",
                "loop_true_1:",
                "data <== mload();",
                "branch_if_zero data, loop_false_1;",
                "jump loop_true_1;",
                "loop_false_1:",
                "jump loop_true_0;",
                "loop_false_0:",
                "return;",
            ]
        );
    }

    #[test]
    fn sibling_loops_never_reuse_labels() {
        let out = lines("[][]");
        assert_eq!(out.iter().filter(|l| *l == "loop_true_0:").count(), 1);
        assert_eq!(out.iter().filter(|l| *l == "loop_true_1:").count(), 1);
        assert_eq!(out.iter().filter(|l| *l == "jump loop_true_0;").count(), 1);
        assert_eq!(out.iter().filter(|l| *l == "jump loop_true_1;").count(), 1);
    }

    #[test]
    fn stray_close_is_rejected() {
        match compile("+]") {
            Err(CompileError::MismatchedLoop { position }) => assert_eq!(position, 1),
            other => panic!("expected MismatchedLoop, got {:?}", other),
        }
    }

    #[test]
    fn unclosed_open_is_rejected() {
        match compile("[[]") {
            Err(CompileError::UnterminatedLoop { position }) => assert_eq!(position, 0),
            other => panic!("expected UnterminatedLoop, got {:?}", other),
        }
    }

    #[test]
    fn wrapper_frames_the_body() {
        let asm = compile("+").unwrap();
        assert_eq!(wrap_main(&asm), "function main {\ninc_cell;\nreturn;\n}");
    }

    #[test]
    fn template_substitution_is_exact() {
        let spliced = apply_template("before\n{{ program }}\nafter", "BODY");
        assert_eq!(spliced, "before\nBODY\nafter");
    }
}
