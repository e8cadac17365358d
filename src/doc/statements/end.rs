/*!
# `END`

## Purpose
Immediately and unconditionally stop running the program
and return to direct mode.

## Remarks
Variables are left intact for inspection.
`END` at the end of a program is optional.
In direct mode `END` does nothing.

## Example
```text
10 PRINT 1
20 END
30 PRINT 2
RUN
1
```

*/
