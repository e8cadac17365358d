/*!
# `GOTO <line number>`

## Purpose
Immediately and unconditionally move execution to the specified line number.

## Remarks
The line only has to exist when the jump is taken, so a program may
refer to lines that are typed in later. If it still doesn't exist a
`LINE NUMBER ERROR` will occur.
In direct mode `GOTO` runs the program starting at that line.

## Example
```text
10 GOTO 30
20 PRINT 20
30 PRINT 30
RUN
30
```

*/
