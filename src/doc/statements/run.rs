/*!
# `RUN`

## Purpose
Start the program at its lowest line number.

## Remarks
Variables are kept. Running an empty program does nothing.
The program stops at `END`, after its last line, or on an error.

## Example
```text
10 PRINT 1
20 PRINT 2
RUN
1
2
```

*/
