use std::fmt;

/// Instruction set of the powdr brainfuck machine.
///
/// `Display` renders the exact line the machine's assembler expects,
/// one instruction per line. The query spellings are part of the
/// machine's contract and must not drift.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Instr {
    IncDp,
    DecDp,
    IncCell,
    DecCell,
    /// Ask the prover for the input value at the current input pointer.
    InputQuery,
    /// Store the `data` register at the current data pointer.
    MstoreData,
    AdvanceInPtr,
    /// Load the cell at the current data pointer into `data`.
    MloadData,
    /// Hand the `data` register to the prover as program output.
    OutputQuery,
    Label(String),
    BranchIfZero(String),
    Jump(String),
    Return,
}

impl fmt::Display for Instr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Instr::IncDp => write!(f, "inc_dp;"),
            Instr::DecDp => write!(f, "dec_dp;"),
            Instr::IncCell => write!(f, "inc_cell;"),
            Instr::DecCell => write!(f, "dec_cell;"),
            Instr::InputQuery => write!(
                f,
                "data <=X= ${{ std::prover::Query::Input(std::convert::int(std::prover::eval(in_ptr))) }};"
            ),
            Instr::MstoreData => write!(f, "mstore data;"),
            Instr::AdvanceInPtr => write!(f, "in_ptr <=X= in_ptr + 1;"),
            Instr::MloadData => write!(f, "data <== mload();"),
            Instr::OutputQuery => write!(
                f,
                "data <=X= ${{ std::prover::Query::Output(1, std::convert::int(std::prover::eval(data))) }};"
            ),
            Instr::Label(name) => write!(f, "{}:", name),
            Instr::BranchIfZero(target) => write!(f, "branch_if_zero data, {};", target),
            Instr::Jump(target) => write!(f, "jump {};", target),
            Instr::Return => write!(f, "return;"),
        }
    }
}
